// Copyright 2024 p256-keymat Developers
// Licensed under the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>
// This file may not be copied, modified, or distributed except according to those terms.

use std::process;

#[tokio::main]
async fn main() {
    let keypair = match p256_keymat::generate_keypair().await {
        Ok(k) => k,
        Err(e) => {
            eprintln!("FAILURE: could not generate keypair: {}", e);
            process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&keypair) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("FAILURE: could not serialize keypair: {}", e);
            process::exit(1);
        }
    }
}
