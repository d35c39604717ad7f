// Madrigal improviser CLI entry point.
//
// Prints a short theory tour of the chosen key signature, improvises a
// phrase for one voice, and writes it to a Standard MIDI File.
//
// Usage:
//   cargo run -p madrigal_improv -- [output.mid] [--seed N] [--key KEY]
//     [--mode MODE] [--style STYLE] [--measures N] [--tempo BPM]
//
// Modes: major, natural-minor, harmonic-minor, melodic-minor
// Styles: melody, harmony

use madrigal_improv::midi::write_midi;
use madrigal_improv::phrase::improvise;
use madrigal_improv::voice::{Style, Voice};
use madrigal_theory::{Degree, Interval, Key, KeySignature, Letter, Mode, Pitch, TimeSignature};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse arguments
    let output_path = args
        .get(1)
        .filter(|s| !s.starts_with("--"))
        .map(|s| s.as_str())
        .unwrap_or("improvisation.mid");
    let seed: Option<u64> = parse_flag(&args, "--seed");
    let tempo: u16 = parse_flag(&args, "--tempo").unwrap_or(96);
    let measures: usize = parse_flag(&args, "--measures").unwrap_or(4);
    let key_name: String = parse_flag(&args, "--key").unwrap_or_else(|| "C".to_string());
    let mode_name: String = parse_flag(&args, "--mode").unwrap_or_else(|| "major".to_string());
    let style_name: String = parse_flag(&args, "--style").unwrap_or_else(|| "melody".to_string());

    let signature = KeySignature::new(parse_key(&key_name), parse_mode(&mode_name));
    let style = parse_style(&style_name);

    println!("=== Madrigal Improviser ===");
    println!("Output: {}", output_path);
    println!("Key signature: {}", signature);
    println!("Style: {}", style);
    println!("Tempo: {} BPM", tempo);
    println!("Measures: {}", measures);
    if let Some(s) = seed {
        println!("Seed: {}", s);
    }
    println!();

    println!("[1/3] Theory tour of {}...", signature);

    let spelled: Vec<String> = Degree::ALL
        .iter()
        .map(|&d| signature.key_of(d).to_string())
        .collect();
    println!("  Scale: {}", spelled.join(" "));

    // Tonic arpeggio climbing through mediant and dominant.
    let mut current = Pitch::new(signature.key_of(Degree::Tonic), 4);
    let mut arpeggio = vec![current.to_string()];
    for degree in [Degree::Mediant, Degree::Dominant, Degree::Tonic] {
        current = current.higher_pitch(signature.key_of(degree));
        arpeggio.push(current.to_string());
    }
    println!("  Arpeggio: {}", arpeggio.join(" "));

    // Perfect fifths walk the full chromatic circle before closing.
    let origin = Pitch::new(Key::new(Letter::C), 2);
    let mut walk = origin;
    let mut fifths = Vec::new();
    loop {
        walk = walk.step(Interval::PERFECT_FIFTH);
        fifths.push(walk.to_string());
        if Key::is_enharmonic(walk.key(), origin.key()) {
            break;
        }
    }
    println!(
        "  Circle of fifths: {} ({} steps)",
        fifths.join(" "),
        fifths.len()
    );

    let origin = Pitch::new(Key::new(Letter::C), 4);
    let mut walk = origin;
    let mut chromatic = vec![walk.to_string()];
    loop {
        walk = walk.half_step_up();
        chromatic.push(walk.to_string());
        if Key::is_enharmonic(walk.key(), origin.key()) {
            break;
        }
    }
    println!("  Chromatic: {}", chromatic.join(" "));

    println!("[2/3] Improvising {} measures of {}...", measures, style);
    let mut rng = if let Some(s) = seed {
        StdRng::seed_from_u64(s)
    } else {
        StdRng::from_os_rng()
    };
    let phrase = match improvise(
        signature,
        TimeSignature::COMMON_TIME,
        Voice::new(style),
        measures,
        &mut rng,
    ) {
        Ok(phrase) => phrase,
        Err(e) => {
            eprintln!("  Error improvising: {}", e);
            std::process::exit(1);
        }
    };
    println!(
        "  {} sonorities ({:.1} whole notes).",
        phrase.sonorities().len(),
        phrase.total_value()
    );

    println!("[3/3] Writing MIDI to {}...", output_path);
    match write_midi(&phrase, tempo, Path::new(output_path)) {
        Ok(()) => println!("  Done."),
        Err(e) => {
            eprintln!("  Error writing MIDI: {}", e);
            std::process::exit(1);
        }
    }

    println!();
    println!("Play with: timidity {} (or any MIDI player)", output_path);
}

fn parse_key(name: &str) -> Key {
    match name.parse() {
        Ok(key) => key,
        Err(_) => {
            eprintln!("Unknown key '{}'. Using C.", name);
            Key::new(Letter::C)
        }
    }
}

fn parse_mode(name: &str) -> Mode {
    match name.to_lowercase().as_str() {
        "major" => Mode::Major,
        "minor" | "natural-minor" => Mode::NaturalMinor,
        "harmonic-minor" => Mode::HarmonicMinor,
        "melodic-minor" => Mode::MelodicMinor,
        _ => {
            eprintln!("Unknown mode '{}'. Using major.", name);
            Mode::Major
        }
    }
}

fn parse_style(name: &str) -> Style {
    match name.to_lowercase().as_str() {
        "melody" => Style::Melody,
        "harmony" => Style::Harmony,
        _ => {
            eprintln!("Unknown style '{}'. Using melody.", name);
            Style::Melody
        }
    }
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
}
