use colored::Colorize;

use symph_spec::Transaction;

/// Prints the transaction summary that heads every human-readable report.
pub(crate) fn print_transaction(tx: &Transaction) {
    println!("{} {}", "Signature:".dimmed(), tx.signature);
    println!("{} {}", "Type:".dimmed(), tx.tx_type);
    if !tx.timestamp.is_empty() {
        println!("{} {}", "Time:".dimmed(), tx.timestamp);
    }
    println!("{} {} SOL", "Fee:".dimmed(), tx.fee);
    if let Some(value) = tx.value {
        println!("{} {}", "Value:".dimmed(), value);
    }
    if tx.is_failed() {
        println!("{} {}", "Status:".dimmed(), tx.status.as_str().red());
    }
    if let Some(description) = &tx.description {
        println!("{} {}", "Description:".dimmed(), description);
    }
}

/// Formats a list of frequencies as `220.00, 233.08, ...`.
pub(crate) fn format_frequencies(freqs: &[f64]) -> String {
    freqs
        .iter()
        .map(|f| format!("{:.2}", f))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Shortens a signature for one-line displays.
pub(crate) fn short_signature(signature: &str) -> String {
    if signature.chars().count() <= 16 {
        return signature.to_string();
    }
    let head: String = signature.chars().take(8).collect();
    let tail: String = signature
        .chars()
        .rev()
        .take(8)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("{}...{}", head, tail)
}
