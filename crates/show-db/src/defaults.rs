//! Example shows inserted into a brand new catalog and served by the
//! read-only mock catalog.

use std::sync::LazyLock;

use crate::shows::Show;

type SeedTuple = (
    i64,
    &'static str,
    Option<&'static str>,
    Option<&'static str>,
    &'static [&'static str],
);

const SEED_DEFS: &[SeedTuple] = &[
    (
        1,
        "Survivor",
        Some("Survivor Bingo"),
        Some("Tribal Council"),
        &[
            "Immunity",
            "Blindside",
            "Idol found",
            "Idol played",
            "Merge feast",
            "Rock draw",
            "Fire-making",
            "Medevac",
            "Reward challenge",
            "Puzzle comeback",
            "Confessional tears",
            "Letters from home",
            "Jury speech",
            "Swap twist",
            "Alliance name",
            "Shelter collapses",
            "Rain storm",
            "Chickens",
            "Coconut dinner",
            "Quit threat",
            "Vote split",
            "Hidden advantage",
            "Shot in the dark",
            "Unanimous vote",
            "Torch snuffed",
        ],
    ),
    (
        2,
        "The Great British Bake Off",
        Some("Bake Off Bingo"),
        Some("Handshake"),
        &[
            "Soggy bottom",
            "Star baker",
            "Technical last place",
            "Showstopper collapse",
            "Proving drawer",
            "Raw in the middle",
            "Over-baked",
            "Ice cream melts",
            "Bin moment",
            "Pun from the hosts",
            "Squirrel shot",
            "Rain on the tent",
            "Lamination",
            "Spice is too subtle",
            "Flavours are there",
            "Time called early",
            "Dropped tray",
            "Hug from a judge",
            "Nearly cried",
            "Gravity-defying",
            "Too much gelatine",
            "Bake in the fridge",
            "Sheep in a field",
            "Cake in the oven too long",
            "Lovely bake",
        ],
    ),
    (
        3,
        "Jeopardy!",
        Some("Daily Double Bingo"),
        None,
        &[
            "Daily Double",
            "True Daily Double",
            "Final Jeopardy",
            "Runaway game",
            "Triple stumper",
            "Buzzer trouble",
            "Potent Potables",
            "Wager of zero",
            "Tie going into Final",
            "Wrong phrasing",
            "Category run",
            "Video clue",
            "Before & After",
            "Rhyme Time",
            "Host pronunciation",
            "Contestant anecdote",
            "New champion",
            "Clue crew",
            "Negative score",
            "Unusual wager",
            "Lock game",
            "Bottom-row first",
            "Wordplay category",
            "Dollar bet",
        ],
    ),
];

/// Example shows, in insertion order.
pub static SEED_SHOWS: LazyLock<Vec<Show>> = LazyLock::new(|| {
    SEED_DEFS
        .iter()
        .map(|&(id, show_title, game_title, center_square, phrases)| Show {
            id,
            show_title: show_title.to_string(),
            game_title: game_title.map(str::to_string),
            center_square: center_square.map(str::to_string),
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
        })
        .collect()
});
