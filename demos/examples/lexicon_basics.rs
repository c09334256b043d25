// Copyright 2025 the Gloss Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lexicon basics.
//!
//! Build a glossary, tokenize rules prose with maximum munch, and look up a
//! definition.
//!
//! Run:
//! - `cargo run -p gloss_demos --example lexicon_basics`

use gloss_lexicon::{Glossary, Token};

fn main() {
    let glossary = Glossary::from_entries([
        (
            "Advantage".to_string(),
            "Roll two d20 and use the higher roll.".to_string(),
        ),
        (
            "Attack Roll".to_string(),
            "A d20 roll to determine whether an attack hits.".to_string(),
        ),
        ("d20".to_string(), "A twenty-sided die.".to_string()),
        (
            "Opportunity Attack".to_string(),
            "A reaction Attack Roll provoked by movement.".to_string(),
        ),
    ]);

    let prose = "Make an Attack Roll with Advantage; an Opportunity Attack uses your reaction.";
    let tokens = glossary.tokenize(prose);

    for token in &tokens {
        match token {
            Token::Term(term) => println!("[term] {term}"),
            Token::Text(text) => println!("[text] {text:?}"),
        }
    }

    // Maximum munch: "Attack Roll" wins over any shorter overlap, and the
    // token stream reconstructs the input exactly.
    let rebuilt: String = tokens.iter().map(Token::value).collect();
    assert_eq!(rebuilt, prose);
    assert!(tokens.contains(&Token::Term("Attack Roll".to_string())));

    let def = glossary.definition("Opportunity Attack").unwrap();
    println!("Opportunity Attack: {def}");
    // Definitions are prose too; nested terms inside them is what makes
    // tooltips nest.
    let nested: Vec<_> = glossary
        .tokenize(def)
        .into_iter()
        .filter(Token::is_term)
        .collect();
    println!("nested terms: {nested:?}");
}
