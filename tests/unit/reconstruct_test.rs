//! Play-by-play reconstruction of the fixture game

use pitchpx::gameday::HitLocation;
use pitchpx::output::Record;
use pitchpx::pbp::{AtBatRecord, Half, PitchRecord};
use pitchpx::retrosheet::{BattedBall, Count, EventCode};

use crate::helpers::{column, FixtureGame};

fn pitches_of(pitches: &[PitchRecord], ab_number: u32) -> Vec<&PitchRecord> {
    pitches.iter().filter(|p| p.pa.ab_number == ab_number).collect()
}

#[test]
fn produces_every_row_in_document_order() {
    let pbp = FixtureGame::load().play_by_play();
    let numbers: Vec<u32> = pbp.atbats.iter().map(|ab| ab.pa.ab_number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(pbp.pitches.len(), 16);
    assert_eq!(pbp.actions.len(), 2);
    assert!(pbp.truncations.is_empty());
}

#[test]
fn outs_before_each_atbat_follow_reported_outs() {
    let pbp = FixtureGame::load().play_by_play();
    let outs = |half: Half| -> Vec<Option<u8>> {
        pbp.atbats
            .iter()
            .filter(|ab| ab.pa.half == half)
            .map(|ab| ab.pa.outs_ct)
            .collect()
    };
    assert_eq!(outs(Half::Top), vec![Some(0), Some(1), Some(2)]);
    assert_eq!(outs(Half::Bottom), vec![Some(0), Some(1), Some(1)]);
}

#[test]
fn seager_double() {
    let pbp = FixtureGame::load().play_by_play();
    let ab = &pbp.atbats[4];

    assert_eq!(ab.game.retro_game_id, "SEA201508120");
    assert_eq!(ab.pa.inning_number, 1);
    assert_eq!(ab.pa.half, Half::Bottom);
    assert_eq!(ab.pa.outs_ct, Some(1));
    assert_eq!(ab.pa.event_outs_ct, Some(1));
    assert_eq!(ab.pa.pitcher.mlbid, "592332");
    assert_eq!(ab.pa.pitcher.names.first, "Kevin");
    assert_eq!(ab.pa.pitcher.names.last, "Gausman");
    assert_eq!(ab.pa.pitcher.hand, "R");
    assert_eq!(ab.pa.batter.names.box_name, "Seager, K");
    assert_eq!(ab.pa.batter.hand, "L");
    assert_eq!(ab.pa.start_bases.to_string(), "___");
    assert_eq!(ab.pa.end_bases.to_string(), "_2_");

    assert!(ab.ab_des.starts_with("Kyle Seager doubles (26) on a line drive"));
    assert_eq!(ab.event_tx, "Double");
    assert_eq!(ab.event_cd, EventCode::Double);
    assert_eq!(ab.battedball_cd, Some(BattedBall::LineDrive));
    assert_eq!(ab.hit, Some(HitLocation { x: 211.5, y: 111.51 }));
    assert_eq!((ab.ball_ct, ab.strike_ct), (Some(0), Some(2)));
    assert_eq!(ab.pitch_seq, "SSSX");
    assert_eq!(ab.pitch_type_seq, "SL|FF|FF|FS");
}

#[test]
fn seager_double_row() {
    let pbp = FixtureGame::load().play_by_play();
    let header = AtBatRecord::header();
    let row = pbp.atbats[4].values();
    assert_eq!(row.len(), header.len());

    let cell = |name: &str| row[column(&header, name)].as_str();
    assert_eq!(cell("year"), "2015");
    assert_eq!(cell("st_fl"), "F");
    assert_eq!(cell("regseason_fl"), "T");
    assert_eq!(cell("interleague_fl"), "F");
    assert_eq!(cell("park_name"), "Safeco Field");
    assert_eq!(cell("bat_home_id"), "1");
    assert_eq!(cell("outs_ct"), "1");
    assert_eq!(cell("event_cd"), "21");
    assert_eq!(cell("battedball_cd"), "L");
    assert_eq!(cell("hit_x"), "211.5");
    assert_eq!(cell("hit_y"), "111.51");
    assert_eq!(cell("pitch_seq"), "SSSX");
}

#[test]
fn seager_final_pitch() {
    let pbp = FixtureGame::load().play_by_play();
    let pitches = pitches_of(&pbp.pitches, 5);
    assert_eq!(pitches.len(), 4);

    let last = pitches[3];
    // fouls are reported as "S", so they count as strikes
    assert_eq!(last.count, Count::new(0, 3));
    assert!(last.terminal);
    assert_eq!(last.event_cd, EventCode::Double);
    assert_eq!(last.pitch.id, Some(40));

    let header = PitchRecord::header();
    let row = last.values();
    assert_eq!(row.len(), header.len());
    let cell = |name: &str| row[column(&header, name)].as_str();
    assert_eq!(cell("pa_ball_ct"), "0");
    assert_eq!(cell("pa_strike_ct"), "3");
    assert_eq!(cell("pa_terminal_fl"), "T");
    assert_eq!(cell("pa_event_cd"), "21");
    assert_eq!(cell("pitch_res"), "X");
    assert_eq!(cell("pitch_des"), "In play, no out");
    assert_eq!(cell("pitch_id"), "40");
    assert_eq!(cell("x"), "145.09");
    assert_eq!(cell("y0"), "50.0");
    assert_eq!(cell("start_speed"), "84.7");
    assert_eq!(cell("vy0"), "-123.94");
    assert_eq!(cell("break_length"), "7.3");
    assert_eq!(cell("pitch_type"), "FS");
    assert_eq!(cell("pitch_type_seq"), "SL|FF|FF|FS");
    assert_eq!(cell("type_confidence"), "2.0");
    assert_eq!(cell("zone"), "13");
    assert_eq!(cell("sv_id"), "150812_125336");
}

#[test]
fn pitch_sequences_are_running_prefixes() {
    let pbp = FixtureGame::load().play_by_play();
    for ab in &pbp.atbats {
        let pitches = pitches_of(&pbp.pitches, ab.pa.ab_number);
        for (i, pitch) in pitches.iter().enumerate() {
            assert_eq!(pitch.pitch_seq.len(), i + 1);
            assert!(ab.pitch_seq.starts_with(&pitch.pitch_seq));
            assert!(ab.pitch_type_seq.starts_with(&pitch.pitch_type_seq));
        }
        let last = pitches.last().unwrap();
        assert_eq!(last.pitch_seq, ab.pitch_seq);
        assert_eq!(last.pitch_type_seq, ab.pitch_type_seq);
    }
}

#[test]
fn strikeout_ends_on_the_third_strike() {
    let pbp = FixtureGame::load().play_by_play();
    assert_eq!(pbp.atbats[2].event_cd, EventCode::Strikeout);
    assert_eq!(pbp.atbats[2].battedball_cd, None);

    let flags: Vec<bool> = pitches_of(&pbp.pitches, 3).iter().map(|p| p.terminal).collect();
    assert_eq!(flags, vec![false, false, false, true]);
}

#[test]
fn double_play_clears_the_bases() {
    let pbp = FixtureGame::load().play_by_play();
    let ab = &pbp.atbats[5];
    assert_eq!(ab.event_cd, EventCode::GenericOut);
    assert_eq!(ab.battedball_cd, Some(BattedBall::GroundBall));
    assert_eq!(ab.pa.start_bases.to_string(), "_2_");
    assert_eq!(ab.pa.end_bases.to_string(), "___");
    assert_eq!(ab.pa.event_outs_ct, Some(3));
    assert_eq!(ab.hit, None);
}

#[test]
fn actions_keep_their_half_and_names() {
    let pbp = FixtureGame::load().play_by_play();
    let visit = &pbp.actions[0];
    assert_eq!(visit.half, Half::Top);
    assert_eq!(visit.player.last, "Iwakuma");
    assert_eq!(visit.node.event, "Game Advisory");

    let switch = &pbp.actions[1];
    assert_eq!(switch.half, Half::Bottom);
    assert_eq!(switch.player.first, "Unknown");
    assert_eq!(switch.player.box_name, "Unknown");
    assert_eq!(switch.node.event_num, Some(30));
}
