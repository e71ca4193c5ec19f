// Copyright 2024 p256-keymat Developers
// Licensed under the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>
// This file may not be copied, modified, or distributed except according to those terms.

use p256_keymat::{ErrorKind, KeypairHex};
use std::env;
use std::process;

fn main() {
    let mut args = env::args();

    if args.len() != 4 {
        println!("Usage:  verify_keypair <public> <public_uncompressed> <private>");
        process::exit(1);
    }

    let _ = args.next(); // the program name

    let keypair = match (args.next(), args.next(), args.next()) {
        (Some(public), Some(public_uncompressed), Some(private)) => KeypairHex {
            public,
            public_uncompressed,
            private,
        },
        _ => {
            println!("Usage:  verify_keypair <public> <public_uncompressed> <private>");
            process::exit(1);
        }
    };

    match p256_keymat::verify_keypair(&keypair) {
        Ok(()) => println!("SUCCESS: Keys match."),
        Err(e) if e.kind() == ErrorKind::Decode => {
            println!("FAILURE: input is not valid hex: {}", e);
            process::exit(1);
        }
        Err(e) => {
            println!("FAILURE: Keys are NOT a valid pair: {}", e);
            process::exit(1);
        }
    }
}
