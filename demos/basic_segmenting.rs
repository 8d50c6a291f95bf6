//! Basic Segmenting
//!
//! The minimal example: clean extracted text and cut it into segments.
//!
//! ```bash
//! cargo run --example basic_segmenting
//! ```

use lesstof::{clean, SegmentBounds, Segmenter, TextSegmenter};

fn main() {
    let extracted = "Hoofdstuk 2: De cel\r\n\r\n\r\n\
        Alle organismen zijn opgebouwd uit cellen. Een cel heeft een celmembraan, \
        cytoplasma en meestal een kern.\tIn de kern ligt het DNA.\r\n\r\n\
        Plantencellen hebben daarnaast een celwand en bladgroenkorrels. \
        Dierlijke cellen hebben die niet.\r\n\r\n\
        Samenvatting: de cel is de bouwsteen van het leven.";

    let text = clean(extracted);
    let segmenter = TextSegmenter::new(SegmentBounds::new(100, 200).unwrap());
    let segments = segmenter.segment(&text);

    println!("Cleaned: {} chars", text.chars().count());
    println!("Segments: {}\n", segments.len());

    for segment in &segments {
        println!("[{}] {} chars:\n{}\n", segment.index, segment.len(), segment.text);
    }
}
