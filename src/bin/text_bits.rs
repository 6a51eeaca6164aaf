use baseband_rs::phy::{LineCode, Manchester};
use baseband_rs::text::{BITS_PER_CHAR, bits_from_text};

fn main() {
    let message = std::env::args()
        .skip(1)
        .collect::<Vec<_>>()
        .join(" ");
    let message = if message.is_empty() { "A".to_string() } else { message };

    let bits = match bits_from_text(&message) {
        Ok(bits) => bits,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    println!("Message: {:?} ({} bits)", message, bits.len());
    for (ch, chunk) in message.chars().zip(bits.chunks(BITS_PER_CHAR)) {
        let levels = match Manchester.encode(chunk) {
            Ok(levels) => levels,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        };
        let pattern: String = chunk.iter().map(|b| char::from(b'0' + b)).collect();
        let level_str: Vec<&str> = levels
            .iter()
            .map(|&l| if l > 0.0 { "+" } else { "-" })
            .collect();
        println!("  {:?} -> {} -> {}", ch, pattern, level_str.join(""));
    }
}
