//! `wise topics` — What the offline engine knows about.

use wise_advisor::rules::glossary;
use wise_advisor::topics;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("📚 Topics (checked in this order)");
    println!("=================================");
    for (i, topic) in topics().iter().enumerate() {
        println!("  {:>2}. {:<24} /{}/", i + 1, topic.id(), topic.pattern());
    }

    println!();
    println!("📖 Glossary terms");
    println!("=================");
    let terms: Vec<&str> = glossary().iter().map(|g| g.term()).collect();
    println!("  {}", terms.join(", "));

    Ok(())
}
