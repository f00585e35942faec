use md5lab::hmac_md5_hex;

fn main() {
    let mut args = std::env::args().skip(1);
    let key = args.next().unwrap_or_else(|| "Hello".to_string());
    let message = args.next().unwrap_or_else(|| "World".to_string());

    println!("{}", hmac_md5_hex(key.as_bytes(), message.as_bytes()));
}
