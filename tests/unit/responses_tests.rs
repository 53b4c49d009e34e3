//! Unit tests for template rendering and random selection.

use argument_arena::bot::responses::{
    pick_explanation, pick_response, render_explanation, render_response, EXPLANATION_COUNT,
    RESPONSE_COUNT,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn every_response_template_interpolates_message_verbatim() {
    let message = "cats are objectively better than dogs";
    for index in 0..RESPONSE_COUNT {
        let rendered = render_response(index, message);
        assert!(
            rendered.contains(message),
            "template {index} must embed the message: {rendered}"
        );
    }
}

#[test]
fn response_templates_are_distinct() {
    let rendered: Vec<String> = (0..RESPONSE_COUNT)
        .map(|index| render_response(index, "x"))
        .collect();
    for (i, a) in rendered.iter().enumerate() {
        for b in rendered.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn every_explanation_template_interpolates_both_point_values() {
    for index in 0..EXPLANATION_COUNT {
        let rendered = render_explanation(index, 7, 3);
        assert!(rendered.contains("7 points"), "user points in: {rendered}");
        assert!(rendered.contains("3 points"), "bot points in: {rendered}");
    }
}

#[test]
fn pick_response_returns_a_member_of_the_template_set() {
    let mut rng = StdRng::seed_from_u64(0);
    let message = "the moon landing was staged";
    let all: Vec<String> = (0..RESPONSE_COUNT)
        .map(|index| render_response(index, message))
        .collect();

    for _ in 0..20 {
        let picked = pick_response(&mut rng, message);
        assert!(all.contains(&picked));
    }
}

#[test]
fn pick_explanation_returns_a_member_of_the_template_set() {
    let mut rng = StdRng::seed_from_u64(0);
    let all: Vec<String> = (0..EXPLANATION_COUNT)
        .map(|index| render_explanation(index, 2, 3))
        .collect();

    for _ in 0..20 {
        let picked = pick_explanation(&mut rng, 2, 3);
        assert!(all.contains(&picked));
    }
}

#[test]
fn identical_seeds_produce_identical_selections() {
    let message = "pineapple belongs on pizza";

    let mut first = StdRng::seed_from_u64(42);
    let mut second = StdRng::seed_from_u64(42);

    for _ in 0..10 {
        assert_eq!(
            pick_response(&mut first, message),
            pick_response(&mut second, message)
        );
    }
}
