//! MORUS Basic Example
//!
//! Minimal usage: seal, open, and what a forgery looks like.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used)]

use morus::Morus1280;

fn main() {
    let key = [0x42u8; morus::KEY_SIZE];
    // A nonce must never repeat under the same key.
    let nonce = [0x24u8; morus::NONCE_SIZE];
    let aead = Morus1280::new(&key);

    let data = b"Hello, World!";
    let sealed = aead.seal(&nonce, data, b"header");

    println!("Engine: {}", morus::active_backend());
    println!("Data:   {:?}", String::from_utf8_lossy(data));
    println!("Sealed: {}", hex::encode(&sealed));

    let opened = aead.open(&nonce, &sealed, b"header").unwrap();
    println!("Opened: {:?}", String::from_utf8_lossy(&opened));

    let mut forged = sealed.clone();
    forged[0] ^= 1;
    match aead.open(&nonce, &forged, b"header") {
        Ok(_) => println!("Forgery accepted?!"),
        Err(e) => println!("Forgery: {e}"),
    }
}
