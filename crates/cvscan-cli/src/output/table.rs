use cvscan_core::nlp::Tone;
use cvscan_core::ExtractionResult;

const NOT_FOUND: &str = "Not Found";

pub fn print(result: &ExtractionResult, preview_chars: usize) {
    if preview_chars > 0 {
        println!("=== Extracted Text (preview) ===\n");
        let preview = result.preview(preview_chars);
        if preview.trim().is_empty() {
            println!("  (no text extracted)");
        } else {
            for line in preview.lines() {
                println!("  {}", line);
            }
            if preview.len() < result.raw_text.len() {
                println!("  ...");
            }
        }
        println!();
    }

    println!("=== Extracted Information ===\n");
    print_list("Names", &result.names);
    print_list("Emails", &result.emails);
    print_list("Phone Numbers", &result.phones);
    let skills: Vec<String> = result.skills.iter().cloned().collect();
    print_list("Skills", &skills);

    match result.experience_years {
        Some(years) => println!("  Estimated Experience: {} years", years),
        None => println!("  Estimated Experience: {}", NOT_FOUND),
    }
    println!();

    println!(
        "=== {} Sentiment: {:.2} ===\n",
        Tone::of(result.sentiment_score),
        result.sentiment_score
    );
    println!("  Suggestion: {}", result.suggestion.message);
}

fn print_list(label: &str, values: &[String]) {
    let shown = if values.is_empty() {
        NOT_FOUND.to_string()
    } else {
        values.join(", ")
    };
    println!("  {}: {}", label, shown);
}
