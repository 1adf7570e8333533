//! End-to-end walking scenarios
//!
//! Full maps walked from `@` to `x`, asserting the collected letters and the
//! exact visited-square sequence, plus the failure modes a walk can hit.
//! Maps are rectangular; rows are padded with trailing blanks where the
//! drawing would otherwise be ragged.

use rstest::rstest;
use trackwalk::track::{parse, walk, Grid, Position, WalkError};

fn grid(text: &str) -> Grid {
    parse(text).expect("valid map")
}

#[rstest]
#[case::basic(
    "  @---A---+\n\
     \x20         |\n\
     \x20 x-B-+   C\n\
     \x20     |   |\n\
     \x20     +---+",
    "ACB",
    "@---A---+|C|+---+|+-B-x"
)]
#[case::straight_through_intersections(
    "  @         \n\
     \x20 | +-C--+  \n\
     \x20 A |    |  \n\
     \x20 +---B--+  \n\
     \x20   |      x\n\
     \x20   |      |\n\
     \x20   +---D--+",
    "ABCD",
    "@|A+---B--+|+--C-+|-||+---D--+|x"
)]
#[case::corner_letters(
    "  @---A---+\n\
     \x20         |\n\
     \x20 x-B-+   |\n\
     \x20     |   |\n\
     \x20     +---C",
    "ACB",
    "@---A---+|||C---+|+-B-x"
)]
#[case::letters_collected_once(
    "    +--B--+  \n\
     \x20   |   +-C-+\n\
     \x20@--A-+ | | |\n\
     \x20   | | +-+ D\n\
     \x20   +-+     |\n\
     \x20           x",
    "ABCD",
    "@--A-+|+-+|A|+--B--+C|+-+|+-C-+|D|x"
)]
#[case::compact_turns(
    " +-B-+  \n\
     \x20|  +C-+\n\
     @A+ ++ D\n\
     \x20++    x",
    "ABCD",
    "@A+++A|+-B-+C+++C-+Dx"
)]
fn walks_to_the_end_marker(#[case] text: &str, #[case] letters: &str, #[case] path: &str) {
    let collector = walk(&grid(text)).expect("walk succeeds");
    assert_eq!(collector.letters(), letters);
    assert_eq!(collector.path(), path);
}

/// The letters are always the first-visit dedup of the letters in the path.
#[rstest]
#[case("  @---A---+\n\
        \x20         |\n\
        \x20 x-B-+   C\n\
        \x20     |   |\n\
        \x20     +---+")]
#[case(" +-B-+  \n\
        \x20|  +C-+\n\
        @A+ ++ D\n\
        \x20++    x")]
fn letters_follow_first_visit_order(#[case] text: &str) {
    let collector = walk(&grid(text)).expect("walk succeeds");
    let mut first_visits = String::new();
    for ch in collector.path().chars().filter(char::is_ascii_uppercase) {
        if !first_visits.contains(ch) {
            first_visits.push(ch);
        }
    }
    assert_eq!(collector.letters(), first_visits);
}

#[test]
fn refuses_a_map_with_no_start() {
    let result = walk(&grid(
        "     -A---+\n\
         \x20         |\n\
         \x20 x-B-+   C\n\
         \x20     |   |\n\
         \x20     +---+",
    ));
    assert_eq!(
        result.unwrap_err(),
        WalkError::InvalidEndpoints { starts: 0, ends: 1 }
    );
}

#[test]
fn refuses_a_map_with_no_end() {
    let result = walk(&grid(
        "   @--A---+\n\
         \x20         |\n\
         \x20   B-+   C\n\
         \x20     |   |\n\
         \x20     +---+",
    ));
    assert_eq!(
        result.unwrap_err(),
        WalkError::InvalidEndpoints { starts: 1, ends: 0 }
    );
}

#[test]
fn refuses_a_map_with_two_starts() {
    let result = walk(&grid(
        "   @--A-@-+\n\
         \x20         |\n\
         \x20 x-B-+   C\n\
         \x20     |   |\n\
         \x20     +---+",
    ));
    assert_eq!(
        result.unwrap_err(),
        WalkError::InvalidEndpoints { starts: 2, ends: 1 }
    );
}

#[test]
fn refuses_a_map_with_two_ends() {
    let result = walk(&grid(
        "   @--A---+\n\
         \x20         |\n\
         \x20 x-Bx+   C\n\
         \x20     |   |\n\
         \x20     +---+",
    ));
    assert_eq!(
        result.unwrap_err(),
        WalkError::InvalidEndpoints { starts: 1, ends: 2 }
    );
}

#[test]
fn refuses_an_ambiguous_branch() {
    let result = walk(&grid("@-+  \n  |  \n--+-x"));
    assert_eq!(
        result.unwrap_err(),
        WalkError::AmbiguousBranch {
            position: Position::new(2, 2),
            candidates: 2
        }
    );
}

#[test]
fn refuses_an_ambiguous_start() {
    let result = walk(&grid("-@-\nx  "));
    assert_eq!(
        result.unwrap_err(),
        WalkError::AmbiguousStart { candidates: 2 }
    );
}

#[test]
fn fails_on_a_dead_end() {
    let result = walk(&grid("@-- x"));
    assert_eq!(
        result.unwrap_err(),
        WalkError::DeadEnd {
            position: Position::new(0, 2)
        }
    );
}

#[test]
fn a_looping_track_fails_instead_of_walking_forever() {
    let result = walk(&grid(" +-+ \n | | \n@+-+ \n    x"));
    assert!(matches!(result.unwrap_err(), WalkError::Cycle { .. }));
}

#[test]
fn the_end_marker_is_visited_exactly_once_and_last() {
    let collector = walk(&grid(
        "  @---A---+\n\
         \x20         |\n\
         \x20 x-B-+   C\n\
         \x20     |   |\n\
         \x20     +---+",
    ))
    .expect("walk succeeds");
    let path = collector.path();
    assert_eq!(path.matches('x').count(), 1);
    assert!(path.ends_with('x'));
}
