use prime_age::core::console::ConsoleInput;
use prime_age::core::Request;
use prime_age::{
    is_prime, next_prime, run_interactive, run_once, FixedClock, PrimeAgeEngine, PrimeAgeError,
};
use std::io::Cursor;

#[test]
fn test_end_to_end_interactive_session() {
    let engine = PrimeAgeEngine::new(FixedClock::new(2026));
    let input = "1990\nnineteen\n2026\n\n2019\nq\n1980\n";
    let mut out = Vec::new();

    run_interactive(&engine, Cursor::new(input), &mut out).unwrap();

    let out = String::from_utf8(out).unwrap();
    let expected = [
        "Enter a birthyear. (q to quit)",
        // 36 -> 37
        "2027",
        "",
        "Could not parse 'nineteen' to an integer.",
        "",
        // 0 -> 2
        "2028",
        "",
        "Could not parse '' to an integer.",
        "",
        // 7 -> 11
        "2030",
        "",
    ]
    .join("\n")
        + "\n";
    assert_eq!(out, expected);
}

#[test]
fn test_windows_line_endings() {
    let engine = PrimeAgeEngine::new(FixedClock::new(2026));
    let mut out = Vec::new();

    run_interactive(&engine, Cursor::new("2000\r\nq\r\n"), &mut out).unwrap();

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("2029\n\n"));
    assert!(!out.contains("Could not parse"));
}

#[test]
fn test_console_input_can_be_driven_directly() {
    let mut console = ConsoleInput::new(Cursor::new("x\n-5\nq\n"), Vec::new());

    assert_eq!(console.next_request().unwrap(), Request::Year(-5));
    assert_eq!(console.next_request().unwrap(), Request::Quit);
}

#[test]
fn test_one_shot_matches_next_prime_of_age() {
    for current in [2024, 2025, 2026, 2031] {
        let engine = PrimeAgeEngine::new(FixedClock::new(current));
        let mut out = Vec::new();

        let answer = run_once(&engine, &["2000".to_string()], &mut out).unwrap();

        let expected = 2000 + next_prime(current - 2000);
        assert_eq!(answer.year, expected);
        assert!(is_prime(answer.next_prime));
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", expected));
    }
}

#[test]
fn test_one_shot_future_birth_year() {
    let engine = PrimeAgeEngine::new(FixedClock::new(2026));
    let mut out = Vec::new();

    let err = run_once(&engine, &["2027".to_string()], &mut out).unwrap_err();

    assert!(matches!(err, PrimeAgeError::NegativeAge { .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(out.is_empty());
}
