//! Terminal output formatting.

use colored::Colorize;

use doclens_core::{
    AnalysisReport, EntityExtraction, SectionResult, SentimentAnalysis, Summarization,
};

/// Print a full analysis report.
pub fn print_report(report: &AnalysisReport) {
    println!("{}", "Analysis Results".cyan().bold());
    println!();

    println!("{}", "Entity Extraction".bold());
    match &report.entity_extraction {
        SectionResult::Ok(section) => print_entities(section),
        SectionResult::Failed { error } => println!("  {}", error.red()),
    }
    println!();

    println!("{}", "Sentiment Analysis".bold());
    match &report.sentiment_analysis {
        SectionResult::Ok(section) => print_sentiment(section),
        SectionResult::Failed { error } => println!("  {}", error.red()),
    }
    println!();

    println!("{}", "Summarization".bold());
    match &report.summarization {
        SectionResult::Ok(section) => print_summary(section),
        SectionResult::Failed { error } => println!("  {}", error.red()),
    }
}

fn print_entities(section: &EntityExtraction) {
    if section.entities.is_empty() {
        println!("  {}", "No entities found.".dimmed());
    } else {
        for entity in &section.entities {
            println!("  {} {}", "-".dimmed(), entity);
        }
    }

    if !section.relationships.is_empty() {
        println!("  {}", "Relationships:".bold());
        for relationship in &section.relationships {
            println!("  {} {}", "-".dimmed(), relationship);
        }
    }
}

fn print_sentiment(section: &SentimentAnalysis) {
    let sentiment = match section.sentiment.to_lowercase() {
        s if s.contains("positive") => section.sentiment.green(),
        s if s.contains("negative") => section.sentiment.red(),
        _ => section.sentiment.yellow(),
    };

    println!("  {}: {}", "Sentiment".bold(), sentiment);
    println!("  {}: {}", "Confidence".bold(), section.confidence);
}

fn print_summary(section: &Summarization) {
    if section.summary.is_empty() {
        println!("  {}", "No summary produced.".dimmed());
    } else {
        println!("  {}", section.summary);
    }
}
