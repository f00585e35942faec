use md5lab::{md5_hex, LengthExtension, Md5};

fn main() {
    // The adversary never sees this value, only its length.
    let secret = b"EECS_475_";
    let user_input = b"MalloryF";
    let extension = b"A";

    let original = [&secret[..], &user_input[..]].concat();
    let mac = Md5::new(&original).digest();
    println!("Original hash:           {}", mac);

    let forgery = LengthExtension::new(mac, original.len() as u64).extend(extension);
    let forged = forgery.forged_message(&original);

    println!("Legitimate message hash: {}", md5_hex(&forged));
    println!("Adversary hash:          {}", forgery.digest);
    println!(
        "Appended (hex):          {}",
        hex::encode(&forged[secret.len()..])
    );

    if forgery.digest.to_hex() == md5_hex(&forged) {
        println!("Forgery verified.");
    } else {
        println!("Forgery FAILED.");
        std::process::exit(1);
    }
}
