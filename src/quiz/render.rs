//! Results markup for the quiz container.

use super::QuizReport;

/// Minimal HTML text escaping for values interpolated into markup.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

const ICON_CORRECT: &str = "<i class=\"fas fa-check text-success\"></i>";
const ICON_WRONG: &str = "<i class=\"fas fa-times text-danger\"></i>";

/// Summary (message, score, progress bar) followed by the explanation list.
pub fn results_html(report: &QuizReport) -> String {
    let pct = report.percentage;
    let mut html = String::new();
    html.push_str("<div class=\"quiz-result\">");
    html.push_str(&format!("<h3>{}</h3>", report.tier.message()));
    html.push_str(&format!("<h2 class=\"mt-3\">Votre score : {}/{}</h2>", report.score, report.total));
    html.push_str("<div class=\"progress mt-3\" style=\"height: 30px;\">");
    html.push_str(&format!(
        "<div class=\"progress-bar {}\" role=\"progressbar\" style=\"width: {}%\" aria-valuenow=\"{}\" aria-valuemin=\"0\" aria-valuemax=\"100\">{:.0}%</div>",
        report.tier.badge_class(),
        pct,
        pct,
        pct
    ));
    html.push_str("</div></div>");

    html.push_str("<div class=\"mt-4 bg-white p-4 rounded\">");
    html.push_str(
        "<h4 class=\"text-dark mb-3\"><i class=\"fas fa-check-circle text-success\"></i> Réponses correctes :</h4>",
    );
    html.push_str("<ol class=\"text-start text-dark\">");
    for q in &report.questions {
        let icon = if q.correct { ICON_CORRECT } else { ICON_WRONG };
        html.push_str(&format!("<li class=\"mb-2\">{} {}</li>", icon, escape_html(q.explanation)));
    }
    html.push_str("</ol></div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::score;

    #[test]
    fn escapes_tag_names_in_explanations() {
        assert_eq!(escape_html("La balise <a> & co"), "La balise &lt;a&gt; &amp; co");
    }

    #[test]
    fn renders_summary_and_every_question() {
        let report = score(|id| (id == "q1").then(|| "a".to_string()));
        let html = results_html(&report);
        assert!(html.contains("<h3>Continuez à apprendre ! 📚</h3>"));
        assert!(html.contains("Votre score : 1/10"));
        assert!(html.contains("progress-bar bg-danger"));
        assert!(html.contains("style=\"width: 10%\""));
        assert!(html.contains(">10%</div>"));
        assert_eq!(html.matches("<li ").count(), 10);
        assert_eq!(html.matches("fa-check text-success").count(), 1);
        assert_eq!(html.matches("fa-times text-danger").count(), 9);
        assert!(html.contains("La balise &lt;nav&gt;"));
    }
}
