// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::geometry::{AnchorPoints, Point};
use crate::models::Model;
use colored::*;
use std::path::Path;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// List available models
    pub fn report_models(models: &[Model]) {
        println!("{}", "Models:".bold());
        let width = models.iter().map(|m| m.name.len()).max().unwrap_or(0);
        for model in models {
            println!(
                "  {:<width$}  {}",
                model.name.cyan(),
                model.description.bright_black(),
                width = width
            );
        }
    }

    /// Print an anchor table
    pub fn report_anchors(title: &str, anchors: &AnchorPoints) {
        println!("\n{}", "━".repeat(60).bright_black());
        println!("{} {}", "Anchors:".bold(), title.cyan());
        println!("{}", "━".repeat(60).bright_black());

        if let Some(invalidation) = anchors.invalidation() {
            println!("  {}", "invalidated".red().bold());
            let cause = format!(
                "by `{}` at {}",
                invalidation.operation(),
                invalidation.location()
            );
            println!("  {}", cause.yellow());
            for name in anchors.names() {
                match anchors.get(name) {
                    Ok(point) => println!("  {}  {}", name.bright_black(), Self::format_point(&point)),
                    Err(_) => println!("  {}", name.bright_black()),
                }
            }
        } else if anchors.is_empty() {
            println!("  {}", "(none)".bright_black());
        } else {
            let width = anchors.names().iter().map(|n| n.len()).max().unwrap_or(0);
            for (name, point) in anchors.iter() {
                println!(
                    "  {:<width$}  {}",
                    name.bright_black(),
                    Self::format_point(point),
                    width = width
                );
            }
        }
        println!("{}", "━".repeat(60).bright_black());
    }

    /// Report a written file
    pub fn report_render(model: &str, path: &Path, bytes: usize, duration: Duration) {
        println!("\n{}", "━".repeat(60).bright_black());
        println!("{} {}", "Rendered:".bold(), model.cyan());
        println!("{}", "━".repeat(60).bright_black());
        println!(
            "  {} {}",
            "Output:".bright_black(),
            path.display().to_string().cyan()
        );
        println!("  {} {}", "Size:".bright_black(), bytes.to_string().cyan());
        println!(
            "  {} {}",
            "Time:".bright_black(),
            Self::format_duration(duration).yellow()
        );
        println!("{}", "━".repeat(60).bright_black());
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        println!("\n{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    /// Print success message
    pub fn success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }

    /// Point with 3 decimals; unconstrained axes print as `-`
    fn format_point(point: &Point) -> String {
        let axis = |v: Option<f64>| match v {
            Some(v) => format!("{:>9.3}", v),
            None => format!("{:>9}", "-"),
        };
        format!("{} {} {}", axis(point.x), axis(point.y), axis(point.z))
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }
}
