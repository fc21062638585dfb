//! Synthetic export generator for stress testing chatlens.
//!
//! Usage: cargo run --features gen-test --bin gen_test -- [messages] [output] [format] [--toxic]
//! Example: cargo run --features gen-test --bin gen_test -- 100000 heavy_chat.txt eng
//!
//! Formats: `ger-apple`, `eng`, `ger-android`. With `--toxic`, some lines
//! carry impossible timestamps, so runs need `--on-malformed skip`.

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use rand::Rng;

const AUTHORS: &[&str] = &[
    "Alice",
    "Bob",
    "~\u{202f}Charlie",
    "\u{200e}Dora",
    "Émile",
    "Иван",
    "村上",
    "🔥FireUser🔥",
];

const EMOJIS: &[&str] = &[
    "😀", "😂", "🤣", "😍", "🥰", "🤔", "🙄", "😱", "🔥", "👍", "👍🏽", "❤️", "💔", "🎉", "🇩🇪",
    "👨‍👩‍👧‍👦", "🤷‍♀️",
];

const ENGLISH_TEXT: &[&str] = &[
    "Good morning everyone",
    "That was a great evening, thanks!",
    "I hate waiting for the bus",
    "See you tomorrow",
    "Did anyone bring the keys?",
    "This is terrible news",
    "Love it",
    "ok",
];

const GERMAN_TEXT: &[&str] = &[
    "Guten Morgen zusammen",
    "Das war ein richtig schöner Abend, danke!",
    "Ich hasse es zu warten",
    "Bis morgen",
    "Hat jemand die Schlüssel?",
    "Das ist schlecht",
    "Super Idee",
    "ok",
];

const SYSTEM_LINES: &[&str] = &[
    "Messages and calls are end-to-end encrypted. No one outside of this chat, not even WhatsApp, can read or listen to them.",
    "Bob joined using this group's invite link",
    "This message was deleted",
    "Nachrichten und Anrufe sind Ende-zu-Ende-verschlüsselt.",
];

#[derive(Clone, Copy)]
enum Layout {
    GerApple,
    Eng,
    GerAndroid,
}

impl Layout {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "ger-apple" => Some(Layout::GerApple),
            "eng" | "eng-apple" | "eng-android" => Some(Layout::Eng),
            "ger-android" => Some(Layout::GerAndroid),
            _ => None,
        }
    }

    fn texts(self) -> &'static [&'static str] {
        match self {
            Layout::Eng => ENGLISH_TEXT,
            Layout::GerApple | Layout::GerAndroid => GERMAN_TEXT,
        }
    }

    fn line(self, at: NaiveDateTime, author: &str, message: &str) -> String {
        match self {
            Layout::GerApple => format!(
                "[{}] {}: {}",
                at.format("%d/%m/%Y %H:%M:%S"),
                author,
                message
            ),
            Layout::Eng => {
                let (pm, hour) = at.hour12();
                format!(
                    "[{}, {}:{:02}:{:02} {}] {}: {}",
                    at.format("%d.%m.%y"),
                    hour,
                    at.minute(),
                    at.second(),
                    if pm { "PM" } else { "AM" },
                    author,
                    message
                )
            }
            Layout::GerAndroid => format!(
                "{} - {}: {}",
                at.format("%d.%m.%y, %H:%M"),
                author,
                message
            ),
        }
    }

    /// A line that matches structurally but whose time can't exist.
    fn malformed_line(self, author: &str) -> String {
        match self {
            Layout::GerApple => format!("[31/02/2023 25:61:00] {}: broken", author),
            Layout::Eng => format!("[15.03.23, 13:75:00 PM] {}: broken", author),
            Layout::GerAndroid => format!("15.13.23, 24:99 - {}: broken", author),
        }
    }
}

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map(|s| s.as_str()).unwrap_or("heavy_chat.txt");
    let format = args.get(3).map(|s| s.as_str()).unwrap_or("eng");
    let toxic = args.iter().any(|a| a == "--toxic");

    let Some(layout) = Layout::parse(format) else {
        eprintln!("Unknown format: {}. Use 'ger-apple', 'eng' or 'ger-android'", format);
        std::process::exit(1);
    };

    println!("🧪 Chat Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {}", count);
    println!("   Output:   {}", output);
    println!("   Format:   {}", format);
    if toxic {
        println!("   Toxic:    yes");
    }
    println!();

    generate(layout, count, output, toxic)
}

fn generate(layout: Layout, count: usize, output: &str, toxic: bool) -> io::Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file); // 1MB buffer

    let mut rng = rand::thread_rng();
    let start = std::time::Instant::now();
    let mut bytes_written: usize = 0;

    let mut at = NaiveDate::from_ymd_opt(2023, 1, 1)
        .and_then(|d| d.and_hms_opt(7, 30, 0))
        .unwrap_or_default();

    for i in 0..count {
        at += Duration::seconds(rng.gen_range(5..7200));
        let author = AUTHORS[rng.gen_range(0..AUTHORS.len())];

        let mut lines = Vec::with_capacity(2);
        match i % 50 {
            7 => lines.push(SYSTEM_LINES[rng.gen_range(0..SYSTEM_LINES.len())].to_string()),
            13 if toxic => lines.push(layout.malformed_line(author)),
            21 => {
                // Multi-line message: the continuation is not a record
                lines.push(layout.line(at, author, "First line of a long story"));
                lines.push("and the second line without a timestamp".to_string());
            }
            _ => lines.push(layout.line(at, author, &generate_message(layout, &mut rng))),
        }

        for line in lines {
            writeln!(writer, "{}", line)?;
            bytes_written += line.len() + 1;
        }

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            let mps = (i + 1) as f64 / elapsed;
            let mb = bytes_written as f64 / 1_000_000.0;
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                mb,
                mps
            );
        }
    }

    writer.flush()?;

    let elapsed = start.elapsed();
    let mb = bytes_written as f64 / 1_000_000.0;

    println!("\n\n✅ Done!");
    println!("   Size: {:.2} MB", mb);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    println!(
        "   Speed: {:.0} msg/s",
        count as f64 / elapsed.as_secs_f64()
    );
    Ok(())
}

fn generate_message(layout: Layout, rng: &mut impl Rng) -> String {
    let texts = layout.texts();
    let text = texts[rng.gen_range(0..texts.len())];
    match rng.gen_range(0..10) {
        0..=5 => text.to_string(),
        6 | 7 => {
            let emojis: String = (0..rng.gen_range(1..=4))
                .map(|_| EMOJIS[rng.gen_range(0..EMOJIS.len())])
                .collect();
            format!("{} {}", text, emojis)
        }
        8 => format!("{} https://example.com/{}", text, rng.gen_range(1..1000)),
        _ => format!("{}: {}", text, text.to_lowercase()),
    }
}
