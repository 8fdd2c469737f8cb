use std::rc::Rc;
use yew::prelude::*;
use gloo_timers::callback::Interval;

pub const TICK_MS: u32 = 50;

/// How much of a caption is currently on screen, counted in chars.
#[derive(Clone, Debug, PartialEq)]
pub struct Reveal {
    text: String,
    index: usize,
    len: usize,
}

impl Reveal {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self { text, index: 0, len }
    }

    /// Shows one more character. No-op once everything is visible.
    pub fn tick(&mut self) {
        if self.index < self.len {
            self.index += 1;
        }
    }

    pub fn visible(&self) -> &str {
        let end = self
            .text
            .char_indices()
            .nth(self.index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len());
        &self.text[..end]
    }

    pub fn is_done(&self) -> bool {
        self.index >= self.len
    }
}

pub enum RevealAction {
    Tick,
}

impl Reducible for Reveal {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RevealAction::Tick => {
                if self.is_done() {
                    return self;
                }
                let mut next = (*self).clone();
                next.tick();
                Rc::new(next)
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    pub text: AttrValue,
    #[prop_or(TICK_MS)]
    pub interval_ms: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Typewriter)]
pub fn typewriter(props: &TypewriterProps) -> Html {
    let reveal = {
        let text = props.text.to_string();
        use_reducer(move || Reveal::new(text))
    };

    // The interval lives only while there is something left to show. Finishing
    // flips the dep, and unmounting runs the same cleanup, so it gets dropped
    // (and cancelled) either way.
    {
        let reveal = reveal.clone();
        let interval_ms = props.interval_ms;
        let done = reveal.is_done();
        use_effect_with_deps(
            move |done| {
                let interval = (!*done).then(|| {
                    Interval::new(interval_ms, move || reveal.dispatch(RevealAction::Tick))
                });
                move || drop(interval)
            },
            done,
        );
    }

    html! {
        <p class={props.class.clone()}>
            { reveal.visible().to_string() }
            <span class="caret">{"\u{00a0}"}</span>
        </p>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(text: &str) -> Vec<String> {
        let mut reveal = Reveal::new(text);
        let mut out = Vec::new();
        while !reveal.is_done() {
            reveal.tick();
            out.push(reveal.visible().to_string());
        }
        out
    }

    #[test]
    fn starts_empty() {
        let reveal = Reveal::new("Hi");
        assert_eq!(reveal.visible(), "");
        assert!(!reveal.is_done());
    }

    #[test]
    fn reveals_one_char_per_tick_then_stops() {
        assert_eq!(frames("Hi"), vec!["H", "Hi"]);
    }

    #[test]
    fn extra_ticks_change_nothing() {
        let mut reveal = Reveal::new("Hi");
        reveal.tick();
        reveal.tick();
        let finished = reveal.clone();
        for _ in 0..5 {
            reveal.tick();
        }
        assert_eq!(reveal, finished);
        assert_eq!(reveal.visible(), "Hi");
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(frames("né✓"), vec!["n", "né", "né✓"]);
    }

    #[test]
    fn empty_caption_is_done_immediately() {
        let reveal = Reveal::new("");
        assert!(reveal.is_done());
        assert_eq!(reveal.visible(), "");
    }

    #[test]
    fn reducer_returns_same_state_when_done() {
        let mut inner = Reveal::new("a");
        inner.tick();
        let state = Rc::new(inner);
        let next = state.clone().reduce(RevealAction::Tick);
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn reducer_advances_until_done() {
        let state = Rc::new(Reveal::new("ab"));
        let state = state.reduce(RevealAction::Tick);
        assert_eq!(state.visible(), "a");
        let state = state.reduce(RevealAction::Tick);
        assert_eq!(state.visible(), "ab");
        assert!(state.is_done());
    }
}
