//! Print an Argon2id hash for `ADMIN_PASSWORD_HASH`.
//!
//! Usage: `showcase-hash-password <password>`, or pipe the password on stdin.

use std::io::BufRead;

use showcase_api::auth::password::hash_password;

fn main() {
    let password = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            let mut line = String::new();
            std::io::stdin()
                .lock()
                .read_line(&mut line)
                .expect("Failed to read password from stdin");
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    if password.is_empty() {
        eprintln!("usage: showcase-hash-password <password>");
        std::process::exit(2);
    }

    match hash_password(&password) {
        Ok(hash) => println!("{hash}"),
        Err(e) => {
            eprintln!("Failed to hash password: {e}");
            std::process::exit(1);
        }
    }
}
