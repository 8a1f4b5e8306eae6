//! Password rule checking and strength scoring
use signup_check::password::{
    check_password_rules, password_strength_score, PasswordRule, StrengthLabel, MAX_SCORE,
};

#[test]
fn test_score_stays_in_range() {
    let samples = [
        "",
        "a",
        "A",
        "1",
        "!",
        "aaaaaaaa",
        "aaaaaaaaaaaa",
        "Aa1!",
        "Aa1!Aa1!",
        "Aa1!Aa1!Aa1!",
        "Aa1!Aa1!Aa1!Aa1!Aa1!Aa1!",
        "ñandú-ñandú-ñandú",
        "\u{1F600}\u{1F600}\u{1F600}\u{1F600}\u{1F600}\u{1F600}\u{1F600}\u{1F600}",
    ];
    for password in samples {
        let strength = password_strength_score(password);
        assert!(strength.score <= MAX_SCORE, "{password:?} scored {}", strength.score);
        assert_eq!(strength.label, StrengthLabel::from_score(strength.score));
    }
}

#[test]
fn test_reference_scores() {
    let empty = password_strength_score("");
    assert_eq!((empty.score, empty.label), (0, StrengthLabel::Weak));

    let strong = password_strength_score("Password123!");
    assert_eq!((strong.score, strong.label), (6, StrengthLabel::Strong));

    let medium = password_strength_score("password1");
    assert_eq!((medium.score, medium.label), (3, StrengthLabel::Medium));

    let weak = password_strength_score("pass1");
    assert_eq!((weak.score, weak.label), (2, StrengthLabel::Weak));
}

#[test]
fn test_exact_boundaries() {
    // 3 points: >= 8, lower, digit
    let medium = password_strength_score("abcdefg1");
    assert_eq!(medium.score, 3);
    assert_eq!(medium.label, StrengthLabel::Medium);

    // 5 points: >= 8, upper, lower, digit, special
    let strong = password_strength_score("Abcdef1!");
    assert_eq!(strong.score, 5);
    assert_eq!(strong.label, StrengthLabel::Strong);
}

#[test]
fn test_long_password_earns_second_length_point() {
    assert_eq!(password_strength_score("abcdefghijk").score, 2);
    assert_eq!(password_strength_score("abcdefghijkl").score, 3);
}

#[test]
fn test_multibyte_length_counts_characters() {
    // Eight characters, sixteen bytes
    assert!(!check_password_rules("éééééééé").contains(&PasswordRule::MinLength));
    assert!(check_password_rules("ééé").contains(&PasswordRule::MinLength));
}

#[test]
fn test_every_special_character_counts() {
    for c in "!@#$%^&*(),.?\":{}|<>".chars() {
        let password = format!("Abcdefg1{c}");
        assert!(check_password_rules(&password).is_empty(), "{password}");
    }
    assert_eq!(
        check_password_rules("Abcdefg1-"),
        vec![PasswordRule::Special]
    );
}

#[test]
fn test_rule_messages() {
    let messages: Vec<&str> = check_password_rules("")
        .into_iter()
        .map(PasswordRule::message)
        .collect();
    assert_eq!(
        messages,
        vec![
            "Password must be at least 8 characters long",
            "Password must contain at least one uppercase letter",
            "Password must contain at least one lowercase letter",
            "Password must contain at least one number",
            "Password must contain at least one special character",
        ]
    );
}
