use chrono::{DateTime, Utc};
use shared::clock::{ContestClock, ContestDisplay, ContestPhase};
use shared::Contest;
use yew::prelude::*;

/// Text shown next to the badge, e.g. "Starts in 01:02:03"
pub fn countdown_label(display: &ContestDisplay) -> String {
    match display.phase {
        ContestPhase::Ended => display.phase.countdown_caption().to_string(),
        phase => format!("{} {}", phase.countdown_caption(), display.countdown),
    }
}

#[derive(Properties, PartialEq)]
pub struct PhaseBadgeProps {
    pub phase: ContestPhase,
}

#[function_component(PhaseBadge)]
pub fn phase_badge(props: &PhaseBadgeProps) -> Html {
    html! {
        <span class={props.phase.css_class()}>{props.phase.label()}</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct CountdownProps {
    pub contest: Contest,
    /// Instant sampled by the owning view on its latest tick
    pub now: DateTime<Utc>,
}

#[function_component(Countdown)]
pub fn countdown(props: &CountdownProps) -> Html {
    let display = ContestClock::snapshot(&props.contest, props.now);

    html! {
        <div class="contest-timer">
            <PhaseBadge phase={display.phase} />
            <span class="countdown" id="countdown">{countdown_label(&display)}</span>
        </div>
    }
}
