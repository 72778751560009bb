//! Scripted games through the terminal session.

use pentago_engine::{BoardConfig, GameEngine, GameStatus, PlayerId};
use scalable_pentago::{Session, SessionOutcome};
use std::io::Cursor;

fn play(config: BoardConfig, script: &str) -> (SessionOutcome, String) {
    let input = Cursor::new(script.as_bytes().to_vec());
    let mut session = Session::new(GameEngine::new(config), input, Vec::new());
    let outcome = session.run().expect("session runs");
    let text = String::from_utf8(session.into_output()).expect("utf-8 output");
    (outcome, text)
}

#[test]
fn test_first_player_wins_classic_board() {
    let config = BoardConfig::new(3, 1, 5, 2).expect("valid config");
    // A fills row 2 from column A to E while B plays in sub-board 3.
    // Sub-board 4 stays empty, so turning it moves nothing.
    let script = "\
2 a 4 c
5 a 4 a
2 b 4 c
5 b 4 a
2 c 4 c
4 a 4 a
2 d 4 c
4 b 4 a
2 e 4 c
";
    let (outcome, text) = play(config, script);
    let a = PlayerId::from_letter('A').expect("letter");
    assert_eq!(outcome, SessionOutcome::Finished(GameStatus::Won(vec![a])));
    assert!(text.contains("Player A is a winner!"));
    assert!(text.contains("The game is now over!"));
    assert!(!text.contains("Player B is a winner!"));
}

#[test]
fn test_rejections_are_reported_and_retried() {
    let config = BoardConfig::new(2, 1, 2, 2).expect("valid config");
    let script = "\
0 a 4 c
0 a 4 c
9 a 4 c
0 b 7 c
0 b 4 sideways
1 d 4 c
";
    let (outcome, text) = play(config, script);
    assert_eq!(outcome, SessionOutcome::Abandoned);
    assert!(text.contains("ERROR : Position (0, 0) is already filled"));
    assert!(text.contains("ERROR : Position (9, 0) is outside the 4x4 board"));
    assert!(text.contains("ERROR : Sub-board 7 does not exist (valid: 1-4)"));
    assert!(text.contains("neither clockwise nor counter-clockwise"));
    // The rejected lines all belonged to B; B's last line was accepted.
    assert_eq!(text.matches("PLAYER B'S TURN").count(), 1);
    assert_eq!(text.matches("PLAYER A'S TURN").count(), 2);
}

#[test]
fn test_full_board_draw_is_announced() {
    // 4x4 board of 2x2 sub-boards, four in a row, players A-D.
    // Sub-boards 1-3 are filled while the empty sub-board 4 is turned; the
    // last four markers all go in at (2, c) and are carried round by the
    // clockwise turns of sub-board 4, ending as
    //
    //   A B A B
    //   C D C D
    //   A B A D
    //   C D B C
    let config = BoardConfig::new(2, 1, 4, 4).expect("valid config");
    let script = "\
0 a 4 c
0 b 4 c
1 a 4 c
1 b 4 c
0 c 4 c
0 d 4 c
1 c 4 c
1 d 4 c
2 a 4 c
2 b 4 c
3 a 4 c
3 b 4 c
2 c 4 c
2 c 4 c
2 c 4 c
2 c 4 c
";
    let (outcome, text) = play(config, script);
    assert_eq!(outcome, SessionOutcome::Finished(GameStatus::Drawn));
    assert!(text.contains("The board is full.  Nobody won."));
    assert!(!text.contains("ERROR"));
    assert!(text.contains(" 2 A B  A D"));
    assert!(text.contains(" 3 C D  B C"));
}
