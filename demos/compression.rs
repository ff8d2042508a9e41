//! Example: fixed-width versus Huffman compression.
//!
//! Run with:
//! `cargo run --example compression`

use backprune::greedy::huffman::{compress, fixed_width_bits, HuffmanTree};

fn main() {
    let input = b"AABACDACA";
    println!(
        "Suppose we have this string: {}",
        String::from_utf8_lossy(input)
    );
    println!(
        "A fixed-width code spends the same bits on every symbol: {} bits total.",
        fixed_width_bits(input)
    );

    let encoded = compress(input).expect("input is not empty");
    println!(
        "A Huffman code gives frequent symbols shorter words: {} bits total.",
        encoded.bit_len
    );

    println!();
    println!("The codewords it chose:");
    let table = HuffmanTree::build(input)
        .expect("input is not empty")
        .codewords();
    for (byte, code) in table.iter().enumerate() {
        if let Some(code) = code {
            println!(
                "  {}: {:0width$b}",
                char::from(byte as u8),
                code.bits,
                width = code.len as usize
            );
        }
    }
}
