use anyhow::Result;
use maps4study::SessionOutcome;
use maps4study::view::display_safe;
use serde_json::json;

use crate::workflow::SearchReport;

/// Render the session outcome as plain text. Backend-supplied fields are
/// made display-safe since the terminal has already been restored.
pub(crate) fn format_plain(outcome: &SessionOutcome) -> String {
	if outcome.term.is_empty() {
		return "No search performed\n".to_string();
	}

	let mut out = format!(
		"Last search: {} (page {})\n",
		display_safe(&outcome.term),
		outcome.page
	);
	match &outcome.selection {
		Some(result) => {
			out.push_str(&format!("Selected: {}\n", display_safe(&result.title)));
			out.push_str(&format!("Source: {}\n", display_safe(&result.source_link)));
			out.push_str(&format!("Image: {}\n", display_safe(&result.image_url)));
		}
		None => out.push_str("No selection\n"),
	}
	out
}

/// Print a plain-text representation of the session outcome.
pub(crate) fn print_plain(outcome: &SessionOutcome) {
	print!("{}", format_plain(outcome));
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SessionOutcome) -> Result<String> {
	let selection = match &outcome.selection {
		Some(result) => json!({
			"title": result.title,
			"link": result.source_link,
			"image": result.image_url,
			"source": result.source_label,
		}),
		None => serde_json::Value::Null,
	};

	let payload = json!({
		"term": outcome.term,
		"page": outcome.page,
		"selection": selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the session outcome.
pub(crate) fn print_json(outcome: &SessionOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

/// Render one-shot search results as plain text, one block per result.
pub(crate) fn format_results_plain(report: &SearchReport) -> String {
	let mut out = format!("{}\n", report.status.message);
	for (index, item) in report.items.iter().enumerate() {
		out.push_str(&format!("\n{}. {}\n", index + 1, item.title));
		if !item.source.is_empty() {
			out.push_str(&format!("   source:   {}\n", item.source));
		}
		out.push_str(&format!("   link:     {}\n", item.link));
		out.push_str(&format!("   image:    {}\n", item.image));
		out.push_str(&format!("   download: {}\n", item.download_url));
	}
	out
}

pub(crate) fn print_results_plain(report: &SearchReport) {
	print!("{}", format_results_plain(report));
}

pub(crate) fn print_results_json(report: &SearchReport) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(report)?);
	Ok(())
}
