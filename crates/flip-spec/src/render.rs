use serde_json::{Value, json};

use crate::{
    card::Face,
    page::PageView,
    view::{BackView, CardView, FrqView, Marking, McqView},
};

/// Render the page as human-friendly text.
pub fn render_text(page: &PageView) -> String {
    let mut lines = Vec::new();
    match page {
        PageView::Empty { message } => lines.push(message.clone()),
        PageView::Unit {
            unit_id,
            title,
            heading,
            subheading,
            video,
            cards,
        } => {
            lines.push(format!("Video: {} ({})", title, unit_id));
            lines.push(format!("  Source: {}", video.src));
            lines.push(String::new());
            lines.push(heading.clone());
            lines.push(subheading.clone());
            for (index, card) in cards.iter().enumerate() {
                lines.push(String::new());
                lines.push(format!("Card {}/{}", index + 1, cards.len()));
                lines.push(render_card_text(card));
            }
        }
    }
    lines.join("\n")
}

/// Render the visible face of a single card.
pub fn render_card_text(card: &CardView) -> String {
    let mut lines = vec![format!("[{}] {}", card.key, card.face.as_str())];
    match card.face {
        Face::Front => push_indented(&mut lines, &card.front),
        Face::Back => match &card.back {
            BackView::Mcq(mcq) => mcq_lines(&mut lines, mcq),
            BackView::Frq(frq) => frq_lines(&mut lines, frq),
            BackView::Empty => {}
        },
    }
    lines.join("\n")
}

fn mcq_lines(lines: &mut Vec<String>, mcq: &McqView) {
    push_indented(lines, &mcq.question);
    for option in mcq.visible_options() {
        let mark = match option.marking {
            Marking::Neutral => "",
            Marking::Correct => "  [correct]",
            Marking::Incorrect => "  [your answer]",
        };
        lines.push(format!("  {}. {}{}", option.index + 1, option.text, mark));
    }
    if mcq.explanation_visible {
        push_indented(lines, &format!("Explanation: {}", mcq.explanation));
    }
}

fn frq_lines(lines: &mut Vec<String>, frq: &FrqView) {
    push_indented(lines, &frq.prompt);
    if frq.input_visible {
        if frq.draft.is_empty() {
            lines.push("  Draft: (empty)".to_string());
        } else {
            push_indented(lines, &format!("Draft: {}", frq.draft));
        }
    }
    if let Some(answer) = &frq.your_answer {
        push_indented(lines, &format!("Your Answer: {}", answer));
    }
    if let Some(sample) = &frq.sample_answer {
        push_indented(lines, &format!("Sample Answer: {}", sample));
    }
}

fn push_indented(lines: &mut Vec<String>, text: &str) {
    lines.extend(text.lines().map(|line| {
        if line.is_empty() {
            String::new()
        } else {
            format!("  {}", line)
        }
    }));
}

/// Render the page as a structured JSON-friendly value.
pub fn render_json_ui(page: &PageView) -> Value {
    match page {
        PageView::Empty { message } => json!({
            "status": "empty",
            "message": message,
            "card_count": 0,
            "cards": [],
        }),
        PageView::Unit {
            unit_id,
            title,
            heading,
            subheading,
            video,
            cards,
        } => json!({
            "status": "ready",
            "unit_id": unit_id,
            "title": title,
            "heading": heading,
            "subheading": subheading,
            "video": video,
            "card_count": cards.len(),
            "cards": cards,
        }),
    }
}
