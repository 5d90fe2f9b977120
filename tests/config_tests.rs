//! Integration tests for GameConfig

use reaction_game::config::{
    ANIMATION_REPEATS, REACTION_BUDGET_EASY, REACTION_BUDGET_HARD, REACTION_BUDGET_MEDIUM,
    SCORE_BLINK_OFF_MS, SCORE_BLINK_ON_MS,
};
use reaction_game::{
    Channel, ChannelError, ConfigError, DigitChannels, Difficulty, GameConfig, LedPolarity,
    ReleasePolicy, TimingField,
};

#[test]
fn defaults_use_named_constants() {
    let config = GameConfig::default();

    assert_eq!(config.budget_for(Difficulty::Easy), REACTION_BUDGET_EASY);
    assert_eq!(config.budget_for(Difficulty::Medium), REACTION_BUDGET_MEDIUM);
    assert_eq!(config.budget_for(Difficulty::Hard), REACTION_BUDGET_HARD);
    assert_eq!(config.blink_on_ms, SCORE_BLINK_ON_MS);
    assert_eq!(config.blink_off_ms, SCORE_BLINK_OFF_MS);
    assert_eq!(config.animation_repeats, ANIMATION_REPEATS);
    assert_eq!(config.polarity, LedPolarity::ActiveLow);
    assert_eq!(config.release_policy, ReleasePolicy::AnyPress);
    assert_eq!(GameConfig::builder().build(), Ok(config));
}

#[test]
fn budgets_harden_with_difficulty() {
    let config = GameConfig::default();
    let mut difficulty = Difficulty::default();
    let mut previous = config.budget_for(difficulty);
    for _ in 0..3 {
        difficulty = difficulty.harder();
        let budget = config.budget_for(difficulty);
        assert!(budget <= previous);
        previous = budget;
    }
    assert_eq!(difficulty, Difficulty::Hard);
}

#[test]
fn builder_rejects_shared_digit_channels() {
    let result = GameConfig::builder()
        .digit_channels(DigitChannels {
            hundreds: Channel::ALL[2],
            tens: Channel::ALL[0],
            units: Channel::ALL[0],
        })
        .build();

    assert_eq!(result, Err(ConfigError::DuplicateDigitChannel(Channel::ALL[0])));
}

#[test]
fn builder_rejects_invisible_timings() {
    assert_eq!(
        GameConfig::builder().show_target_ms(0).build(),
        Err(ConfigError::ZeroDuration(TimingField::ShowTarget))
    );
    assert_eq!(
        GameConfig::builder().blink(0, 200).build(),
        Err(ConfigError::ZeroDuration(TimingField::BlinkOn))
    );
    assert_eq!(
        GameConfig::builder().start_animation(0, 1000).build(),
        Err(ConfigError::ZeroDuration(TimingField::StartStep))
    );
    assert_eq!(
        GameConfig::builder().fail_step_ms(0).build(),
        Err(ConfigError::ZeroDuration(TimingField::FailStep))
    );
    // A zero off-time just runs blinks back to back.
    assert!(GameConfig::builder().blink(200, 0).build().is_ok());
    // The dark landing is still written with no pause after it.
    assert!(GameConfig::builder().start_animation(100, 0).build().is_ok());
}

#[test]
fn builder_rejects_animations_that_never_play() {
    assert_eq!(
        GameConfig::builder().animation_repeats(0).build(),
        Err(ConfigError::ZeroRepeats)
    );
    assert_eq!(
        GameConfig::builder().animation_repeats(0).fail_step_ms(0).build(),
        Err(ConfigError::ZeroDuration(TimingField::FailStep))
    );
}

#[test]
fn builder_overrides_timings() {
    let config = GameConfig::builder()
        .show_target_ms(80)
        .start_animation(50, 500)
        .fail_step_ms(100)
        .animation_repeats(3)
        .build()
        .unwrap();

    assert_eq!(config.show_target_ms, 80);
    assert_eq!(config.start_step_ms, 50);
    assert_eq!(config.start_pause_ms, 500);
    assert_eq!(config.fail_step_ms, 100);
    assert_eq!(config.animation_repeats, 3);
}

#[test]
fn errors_describe_the_problem() {
    assert_eq!(
        ConfigError::DuplicateDigitChannel(Channel::ALL[1]).to_string(),
        "channel 1 assigned to more than one score digit"
    );
    assert_eq!(
        ConfigError::ZeroDuration(TimingField::BlinkOn).to_string(),
        "blink_on_ms must be non-zero"
    );
    assert_eq!(
        ConfigError::ZeroRepeats.to_string(),
        "animation_repeats must be at least 1"
    );
    assert_eq!(
        ChannelError::OutOfRange(9).to_string(),
        "channel index 9 out of range (expected 0-3)"
    );
}
