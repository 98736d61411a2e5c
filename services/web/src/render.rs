//! HTML Page Rendering
//!
//! The whole UI is one server-rendered page: the problem form, the
//! clear/export controls, and the solution history. Everything that came
//! from the user or the model passes through `escape_html` before it is
//! interpolated.

use mastermind_core::history::HistoryStore;
use std::fmt::Write;

const STYLE: &str = "\
body { max-width: 720px; margin: 2rem auto; padding: 0 1rem;
       font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; }
textarea { width: 100%; height: 100px; box-sizing: border-box; }
.controls { display: flex; gap: 0.5rem; margin: 0.75rem 0; align-items: center; }
.warning { background-color: #FFF3CD; border: 1px solid #FFE08A;
           padding: 0.6rem 1rem; border-radius: 6px; margin: 0.75rem 0; }
.history-box { max-height: 500px; overflow-y: auto; border: 2px solid #4CAF50;
               padding: 15px; border-radius: 10px; background-color: #f5f7fa; }
.question { font-weight: 700; color: #2E7D32; margin-top: 15px; margin-bottom: 8px; }
.difficulty { display: inline-block; background-color: #FF9800; color: white;
              padding: 2px 8px; border-radius: 12px; font-size: 12px;
              font-weight: bold; margin-left: 10px; }
.answer { margin-bottom: 20px; white-space: pre-wrap; color: #1B5E20;
          line-height: 1.6; background-color: rgba(255, 255, 255, 0.7);
          padding: 12px; border-radius: 8px; border-left: 4px solid #4CAF50; }";

/// Escapes text for safe interpolation into HTML element content and
/// attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the full page for the given history, with an optional warning
/// banner above the form.
pub fn page(history: &HistoryStore, warning: Option<&str>) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n<title>Math Mastermind</title>\n");
    let _ = write!(html, "<style>{STYLE}</style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str("<h1>\u{1F9EE} Math Mastermind</h1>\n");
    html.push_str(
        "<p><strong>Your Expert Mathematical Problem Solver</strong> - From basic arithmetic \
         to advanced calculus, I'll solve any math problem with detailed step-by-step \
         explanations!</p>\n",
    );

    html.push_str(
        "<details>\n<summary>\u{1F4DA} Example Problems I Can Solve</summary>\n<ul>\n\
         <li><strong>Algebra:</strong> \"Solve 2x\u{B2} + 5x - 3 = 0\"</li>\n\
         <li><strong>Calculus:</strong> \"Find the derivative of sin(x\u{B2}) + ln(x)\"</li>\n\
         <li><strong>Geometry:</strong> \"Find the area of a triangle with vertices at (0,0), (3,4), and (6,0)\"</li>\n\
         <li><strong>Statistics:</strong> \"What's the probability of rolling two dice and getting a sum of 7?\"</li>\n\
         <li><strong>Word Problems:</strong> \"A train travels 300 miles in 4 hours. How fast was it going?\"</li>\n\
         </ul>\n</details>\n",
    );

    if let Some(message) = warning {
        let _ = write!(
            html,
            "<div class=\"warning\">\u{26A0} {}</div>\n",
            escape_html(message)
        );
    }

    html.push_str("<form method=\"post\" action=\"/solve\">\n");
    html.push_str(
        "<textarea name=\"problem\" placeholder=\"Example: Solve x\u{B2} + 5x + 6 = 0 \
         or Find the integral of 2x + 3\"></textarea>\n",
    );
    html.push_str("<div class=\"controls\">\n");
    html.push_str("<button type=\"submit\">\u{1F9EE} Solve Problem</button>\n");
    html.push_str(
        "<select name=\"difficulty\">\n\
         <option value=\"Basic\">Basic</option>\n\
         <option value=\"Intermediate\" selected>Intermediate</option>\n\
         <option value=\"Advanced\">Advanced</option>\n\
         </select>\n",
    );
    html.push_str("</div>\n</form>\n");

    html.push_str("<div class=\"controls\">\n");
    html.push_str(
        "<form method=\"post\" action=\"/clear\">\
         <button type=\"submit\">\u{1F9F9} Clear Conversation</button></form>\n",
    );
    if !history.is_empty() {
        html.push_str("<a href=\"/export\">\u{1F4E5} Export Math Solutions</a>\n");
    }
    html.push_str("</div>\n");

    if !history.is_empty() {
        html.push_str("<h3>\u{1F4CB} Solution History (Latest First)</h3>\n");
        html.push_str("<div class=\"history-box\">\n");
        for (number, record) in history.numbered() {
            let _ = write!(
                html,
                "<div class=\"question\">Problem {}: {}<span class=\"difficulty\">{}</span></div>\n",
                number,
                escape_html(&record.question),
                record.difficulty
            );
            let _ = write!(
                html,
                "<div class=\"answer\">Solution {}: {}</div>\n",
                number,
                escape_html(&record.answer)
            );
        }
        html.push_str("</div>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use mastermind_core::history::Difficulty;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<script>alert(\"x\")</script>"),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("x' < y"), "x&#39; &lt; y");
    }

    #[test]
    fn test_page_shows_warning_when_present() {
        let history = HistoryStore::new();

        let without = page(&history, None);
        assert!(!without.contains("class=\"warning\""));

        let with = page(&history, Some("Please enter a math problem"));
        assert!(with.contains("class=\"warning\""));
        assert!(with.contains("Please enter a math problem"));
    }

    #[test]
    fn test_page_hides_history_and_export_when_empty() {
        let rendered = page(&HistoryStore::new(), None);
        assert!(!rendered.contains("Solution History"));
        assert!(!rendered.contains("href=\"/export\""));
    }

    #[test]
    fn test_page_numbers_newest_first() {
        let mut history = HistoryStore::new();
        history.record(
            "Solve 2x\u{B2} + 5x - 3 = 0".to_string(),
            "x = 1/2 or x = -3".to_string(),
            Difficulty::Intermediate,
        );
        history.record(
            "Find the derivative of x^2".to_string(),
            "2x".to_string(),
            Difficulty::Basic,
        );

        let rendered = page(&history, None);
        let newest = rendered
            .find("Problem 2: Find the derivative of x^2")
            .expect("newest problem should be labelled Problem 2");
        let oldest = rendered
            .find("Problem 1: Solve 2x\u{B2} + 5x - 3 = 0")
            .expect("oldest problem should be labelled Problem 1");
        assert!(newest < oldest, "newest record should render first");
        assert!(rendered.contains("href=\"/export\""));
    }

    #[test]
    fn test_page_escapes_user_and_model_text() {
        let mut history = HistoryStore::new();
        history.record(
            "is 1 < 2?".to_string(),
            "<b>yes</b>".to_string(),
            Difficulty::Basic,
        );

        let rendered = page(&history, None);
        assert!(rendered.contains("is 1 &lt; 2?"));
        assert!(rendered.contains("&lt;b&gt;yes&lt;/b&gt;"));
        assert!(!rendered.contains("<b>yes</b>"));
    }
}
