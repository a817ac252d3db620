//! Walks a raw configuration line through the full API: trim the noise,
//! split into fields, slice each field, and join a cleaned-up version.
//!
//! Run with: cargo run --example fields

use bytestr::{ByteStr, StrList};

fn main() {
    let line = ByteStr::new("  host=alpha, port=9042, role=primary \r\n");
    println!("raw line:  {:?}", line);

    let junk: StrList = ["\r\n", " "].into_iter().map(ByteStr::new).collect();
    let trimmed = line.trim(&junk);
    println!("trimmed:   {}", trimmed);

    let fields = trimmed.split(", ").expect("delimiter fits");
    println!("fields:    {}", fields);

    for field in &fields {
        let pair = field.split("=").expect("delimiter fits");
        let key = &pair[0];
        let value = &pair[1];
        println!("  {:10} -> {}", key, value);

        if value.contains("prim") {
            println!("  {:10}    (leader node)", "");
        }
    }

    // Rebuild the line with a different separator; everything up to here
    // was views of the original buffer.
    let semi = ByteStr::new("; ");
    let rebuilt = semi.join(&fields);
    println!("rebuilt:   {}", rebuilt);

    // Slicing accepts indices from either end.
    let host = fields[0].substring(5, 10).expect("in range");
    let port = fields[1].substring(-4, 9).expect("in range");
    println!("host={} port={}", host, port);
}
