use signup_check::password::{check_password_rules, password_strength_score};

fn main() {
    println!("=== Password Strength Demo ===");

    let passwords = ["", "abc", "password1", "Password", "Abcdef1!", "Password123!"];

    for password in passwords {
        let strength = password_strength_score(password);
        println!("\nInput: '{}'", password);
        println!(
            "Strength: {} ({}/6, {})",
            strength.label, strength.score, strength.color_hint
        );
        for rule in check_password_rules(password) {
            println!("  - {}", rule);
        }
    }
}
