use flip_spec::{
    BackView, CardEvent, Face, FlipCard, Marking, McqAnswer, McqBack, Question,
    SAMPLE_ANSWER_FALLBACK, Transition,
};

fn abc_card(correct: usize) -> FlipCard {
    FlipCard::new(
        "unit-q-0",
        Question::mcq(
            "Pick one",
            McqBack {
                question: "Which letter?".into(),
                options: vec!["A".into(), "B".into(), "C".into()],
                correct_answer_index: correct,
                explanation: "Because.".into(),
            },
        ),
    )
}

fn frq_card(sample: Option<&str>) -> FlipCard {
    FlipCard::new(
        "unit-q-1",
        Question::frq("Explain", "Why?", sample.map(String::from)),
    )
}

fn mcq_view(card: &FlipCard) -> flip_spec::McqView {
    match card.view().back {
        BackView::Mcq(view) => view,
        other => panic!("expected mcq back, got {:?}", other),
    }
}

fn frq_view(card: &FlipCard) -> flip_spec::FrqView {
    match card.view().back {
        BackView::Frq(view) => view,
        other => panic!("expected frq back, got {:?}", other),
    }
}

#[test]
fn cards_start_on_front_and_unrevealed() {
    for card in [abc_card(2), frq_card(None)] {
        assert_eq!(card.state().face, Face::Front);
        assert!(!card.state().answer_revealed);
        assert_eq!(card.state().selected_option, None);
        assert!(card.state().draft_answer.is_empty());
    }
}

#[test]
fn clicking_card_toggles_face_until_revealed() {
    let mut card = abc_card(2);
    assert_eq!(card.apply(CardEvent::ClickCard), Transition::Changed);
    assert_eq!(card.state().face, Face::Back);
    card.apply(CardEvent::ClickCard);
    assert_eq!(card.state().face, Face::Front);
}

#[test]
fn selecting_option_reveals_and_locks_selection() {
    let mut card = abc_card(2);
    card.apply(CardEvent::ClickCard);
    assert_eq!(card.mcq_answer(), Some(McqAnswer::Unanswered));

    assert_eq!(card.apply(CardEvent::SelectOption(1)), Transition::Changed);
    assert_eq!(card.state().selected_option, Some(1));
    assert!(card.state().answer_revealed);
    assert_eq!(card.mcq_answer(), Some(McqAnswer::Answered(1)));

    let before = card.state().clone();
    for index in 0..3 {
        assert_eq!(card.apply(CardEvent::SelectOption(index)), Transition::Ignored);
    }
    assert_eq!(card.state(), &before);
}

#[test]
fn selecting_from_front_pins_card_to_back() {
    let mut card = abc_card(2);
    card.apply(CardEvent::SelectOption(0));
    assert_eq!(card.state().face, Face::Back);
}

#[test]
fn out_of_range_option_is_ignored() {
    let mut card = abc_card(2);
    assert_eq!(card.apply(CardEvent::SelectOption(3)), Transition::Ignored);
    assert!(!card.state().answer_revealed);
}

#[test]
fn wrong_answer_shows_selected_and_correct_options() {
    let mut card = abc_card(2);
    card.apply(CardEvent::ClickCard);
    card.apply(CardEvent::SelectOption(0));

    let view = mcq_view(&card);
    let visible: Vec<usize> = view.visible_options().map(|option| option.index).collect();
    assert_eq!(visible, vec![0, 2]);
    assert_eq!(view.options[0].marking, Marking::Incorrect);
    assert_eq!(view.options[1].marking, Marking::Neutral);
    assert_eq!(view.options[2].marking, Marking::Correct);
    assert!(view.explanation_visible);
    assert!(view.options.iter().all(|option| !option.selectable));
}

#[test]
fn correct_answer_marks_exactly_one_option() {
    let mut card = abc_card(1);
    card.apply(CardEvent::SelectOption(1));

    let view = mcq_view(&card);
    let marked: Vec<_> = view.marked_options().collect();
    assert_eq!(marked.len(), 1);
    assert_eq!(marked[0].index, 1);
    assert_eq!(marked[0].marking, Marking::Correct);
    assert_eq!(view.visible_options().count(), 1);
}

#[test]
fn unrevealed_options_are_all_visible_and_unmarked() {
    let view = mcq_view(&abc_card(2));
    assert_eq!(view.visible_options().count(), 3);
    assert_eq!(view.marked_options().count(), 0);
    assert!(!view.explanation_visible);
}

#[test]
fn typing_accumulates_without_flipping_or_revealing() {
    let mut card = frq_card(Some("sample"));
    card.apply(CardEvent::ClickCard);
    card.apply(CardEvent::TypeText("My ".into()));
    card.apply(CardEvent::TypeText("answer".into()));

    assert_eq!(card.state().draft_answer, "My answer");
    assert_eq!(card.state().face, Face::Back);
    assert!(!card.state().answer_revealed);
    assert!(frq_view(&card).input_visible);
}

#[test]
fn set_draft_replaces_buffer() {
    let mut card = frq_card(None);
    card.apply(CardEvent::TypeText("first".into()));
    card.apply(CardEvent::SetDraft("second".into()));
    assert_eq!(card.state().draft_answer, "second");
}

#[test]
fn empty_draft_reveal_shows_only_fallback_sample() {
    let mut card = frq_card(None);
    card.apply(CardEvent::ClickCard);
    card.apply(CardEvent::CheckAnswer);

    let view = frq_view(&card);
    assert!(view.revealed);
    assert!(!view.input_visible);
    assert_eq!(view.your_answer, None);
    assert_eq!(view.sample_answer.as_deref(), Some(SAMPLE_ANSWER_FALLBACK));
}

#[test]
fn reveal_shows_draft_and_sample() {
    let mut card = frq_card(Some("The average falls."));
    card.apply(CardEvent::TypeText("It goes down".into()));
    card.apply(CardEvent::CheckAnswer);

    let view = frq_view(&card);
    assert_eq!(view.your_answer.as_deref(), Some("It goes down"));
    assert_eq!(view.sample_answer.as_deref(), Some("The average falls."));
}

#[test]
fn revealed_draft_is_frozen() {
    let mut card = frq_card(None);
    card.apply(CardEvent::TypeText("done".into()));
    card.apply(CardEvent::CheckAnswer);
    assert_eq!(card.apply(CardEvent::TypeText("more".into())), Transition::Ignored);
    assert_eq!(card.apply(CardEvent::CheckAnswer), Transition::Ignored);
    assert_eq!(card.state().draft_answer, "done");
}

#[test]
fn revealed_cards_stay_on_back() {
    let mut mcq = abc_card(2);
    mcq.apply(CardEvent::ClickCard);
    mcq.apply(CardEvent::SelectOption(2));
    let mut frq = frq_card(None);
    frq.apply(CardEvent::CheckAnswer);

    for card in [&mut mcq, &mut frq] {
        for _ in 0..3 {
            assert_eq!(card.apply(CardEvent::ClickCard), Transition::Ignored);
            assert_eq!(card.state().face, Face::Back);
        }
    }
}

#[test]
fn events_for_the_other_kind_are_ignored() {
    let mut mcq = abc_card(2);
    assert_eq!(mcq.apply(CardEvent::TypeText("x".into())), Transition::Ignored);
    assert_eq!(mcq.apply(CardEvent::CheckAnswer), Transition::Ignored);

    let mut frq = frq_card(None);
    assert_eq!(frq.apply(CardEvent::SelectOption(0)), Transition::Ignored);
    assert_eq!(frq.mcq_answer(), None);
}

#[test]
fn duplicate_option_text_keeps_markings_per_index() {
    let mut card = FlipCard::new(
        "unit-q-2",
        Question::mcq(
            "Twins",
            McqBack {
                question: "Which one?".into(),
                options: vec!["Same".into(), "Same".into(), "Other".into()],
                correct_answer_index: 1,
                explanation: "The second.".into(),
            },
        ),
    );
    card.apply(CardEvent::SelectOption(0));

    let view = mcq_view(&card);
    let summary: Vec<_> = view
        .options
        .iter()
        .map(|option| (option.index, option.visible, option.marking))
        .collect();
    assert_eq!(
        summary,
        vec![
            (0, true, Marking::Incorrect),
            (1, true, Marking::Correct),
            (2, false, Marking::Neutral),
        ]
    );
}

#[test]
fn malformed_card_only_flips() {
    let question: Question = serde_json::from_str(
        r#"{ "type": "mcq", "front": "Broken", "back": "not an object" }"#,
    )
    .expect("deserialize");
    let mut card = FlipCard::new("unit-q-3", question);

    for event in [
        CardEvent::SelectOption(0),
        CardEvent::TypeText("text".into()),
        CardEvent::SetDraft("text".into()),
        CardEvent::CheckAnswer,
    ] {
        assert_eq!(card.apply(event), Transition::Ignored);
    }
    assert_eq!(card.state().face, Face::Front);
    assert!(!card.state().answer_revealed);
    assert_eq!(card.mcq_answer(), None);

    assert_eq!(card.apply(CardEvent::ClickCard), Transition::Changed);
    assert_eq!(card.state().face, Face::Back);
    assert_eq!(card.view().back, BackView::Empty);
}
