//! Table output formatting for CLI commands
//!
//! Renders containers with comfy-table. Status cells are colored unless
//! `NO_COLOR` is set or the terminal is dumb.

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use serde_json::Value;
use std::env;

use super::truncate;
use crate::domain::models::{ContainerInfo, LogEntry};

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
    /// Maximum width for tables (None = auto)
    max_width: Option<u16>,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
            max_width: None,
        }
    }

    /// Create a new table formatter with custom settings
    pub const fn with_config(use_colors: bool, max_width: Option<u16>) -> Self {
        Self {
            use_colors,
            max_width,
        }
    }

    /// Format a list of containers as a table
    pub fn format_containers(&self, containers: &[ContainerInfo]) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("ID").add_attribute(Attribute::Bold),
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Image").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
        ]);

        for container in containers {
            let name = container.get("name").map_or_else(|| "-".to_string(), render_value);
            let image = container.get("image").map_or_else(|| "-".to_string(), render_value);

            table.add_row(vec![
                Cell::new(truncate(&container.id, 16)),
                Cell::new(truncate(&name, 30)),
                Cell::new(truncate(&image, 40)),
                self.status_cell(container.status()),
            ]);
        }

        table.to_string()
    }

    /// Format one container as a field/value table
    pub fn format_container_detail(&self, container: &ContainerInfo) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("Field").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![Cell::new("id"), Cell::new(&container.id)]);

        for (key, value) in &container.attributes {
            let cell = if key == "status" {
                self.status_cell(value.as_str())
            } else {
                Cell::new(render_value(value))
            };
            table.add_row(vec![Cell::new(key), cell]);
        }

        table.to_string()
    }

    fn status_cell(&self, status: Option<&str>) -> Cell {
        let status = status.unwrap_or("-");
        if self.use_colors {
            Cell::new(status).fg(status_color(status))
        } else {
            Cell::new(status)
        }
    }

    /// Create a base table with common settings
    fn create_base_table(&self) -> Table {
        let mut table = Table::new();

        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(width);
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Format log records one per line: timestamp, then the payload.
pub fn format_logs(logs: &[LogEntry]) -> String {
    logs.iter()
        .map(|entry| {
            let payload: Vec<(&String, &Value)> = entry.payload().collect();
            let body = match payload.as_slice() {
                [(_, value)] => render_value(value),
                fields => fields
                    .iter()
                    .map(|(key, value)| format!("{key}={}", render_value(value)))
                    .collect::<Vec<_>>()
                    .join(" "),
            };
            match entry.timestamp() {
                Some(ts) => format!("{ts} {body}"),
                None => body,
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Strings print bare; everything else as compact JSON.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

/// Check if color output is supported
fn supports_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    console::colors_enabled()
}

/// Map container status to color
fn status_color(status: &str) -> Color {
    match status.to_lowercase().as_str() {
        "running" | "healthy" | "up" => Color::Green,
        "created" | "starting" | "restarting" => Color::Yellow,
        "paused" => Color::Cyan,
        "exited" | "stopped" => Color::DarkGrey,
        "dead" | "failed" | "error" | "unhealthy" => Color::Red,
        _ => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn container(value: Value) -> ContainerInfo {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_format_containers_plain() {
        let formatter = TableFormatter::with_config(false, Some(120));
        let output = formatter.format_containers(&[
            container(json!({"id": "c1", "name": "web", "image": "nginx", "status": "running"})),
            container(json!({"id": "c2"})),
        ]);

        assert!(output.contains("ID"));
        assert!(output.contains("c1"));
        assert!(output.contains("nginx"));
        assert!(output.contains("running"));
        assert!(output.contains("c2"));
    }

    #[test]
    fn test_format_container_detail_lists_every_field() {
        let formatter = TableFormatter::with_config(false, Some(120));
        let output = formatter.format_container_detail(&container(json!({
            "id": "c1",
            "status": "exited",
            "exitCode": 137,
            "labels": {"team": "infra"}
        })));

        assert!(output.contains("exitCode"));
        assert!(output.contains("137"));
        assert!(output.contains(r#"{"team":"infra"}"#));
    }

    #[test]
    fn test_format_logs() {
        let logs: Vec<LogEntry> = serde_json::from_value(json!([
            {"timestamp": "2024-01-01T00:00:00Z", "message": "ready"},
            {"timestamp": "2024-01-01T00:00:01Z", "stream": "stderr", "message": "oops"},
            {"message": "no time"}
        ]))
        .unwrap();

        assert_eq!(
            format_logs(&logs),
            "2024-01-01T00:00:00Z ready\n2024-01-01T00:00:01Z stream=stderr message=oops\nno time"
        );
    }

    #[test]
    fn test_status_color() {
        assert_eq!(status_color("Running"), Color::Green);
        assert_eq!(status_color("exited"), Color::DarkGrey);
        assert_eq!(status_color("mystery"), Color::White);
    }
}
