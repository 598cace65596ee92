//! A selectable list: a button-triggered popup of options with an active
//! (hovered or keyboard-focused) entry.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListboxState {
    Closed,
    Open { active: Option<usize> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListboxEvent<T> {
    Open,
    Close,
    Toggle,
    Next,
    Previous,
    First,
    Last,
    Activate(T),
    Deactivate,
    Select(T),
    SelectActive,
}

impl<T> ListboxEvent<T> {
    /// Map a `KeyboardEvent.key` value to an event.
    pub fn from_key(key: &str, is_open: bool) -> Option<Self> {
        let event = match (key, is_open) {
            ("ArrowDown" | "ArrowUp" | "Enter" | " ", false) => ListboxEvent::Open,
            ("ArrowDown", true) => ListboxEvent::Next,
            ("ArrowUp", true) => ListboxEvent::Previous,
            ("Enter" | " ", true) => ListboxEvent::SelectActive,
            ("Home", true) => ListboxEvent::First,
            ("End", true) => ListboxEvent::Last,
            ("Escape" | "Tab", true) => ListboxEvent::Close,
            _ => return None,
        };
        Some(event)
    }
}

#[derive(Debug, Clone)]
pub struct Listbox<T: 'static> {
    options: &'static [T],
    state: ListboxState,
}

impl<T> Listbox<T>
where
    T: Copy + PartialEq + 'static,
{
    pub fn new(options: &'static [T]) -> Self {
        Self {
            options,
            state: ListboxState::Closed,
        }
    }

    pub fn state(&self) -> ListboxState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ListboxState::Open { .. })
    }

    pub fn active(&self) -> Option<T> {
        match self.state {
            ListboxState::Open { active: Some(i) } => self.options.get(i).copied(),
            _ => None,
        }
    }

    pub fn is_active(&self, option: T) -> bool {
        self.active() == Some(option)
    }

    /// Apply `event`. `selected` is the caller's current value, used to
    /// place the active entry on open. Returns the option chosen, if any.
    pub fn handle(&mut self, event: ListboxEvent<T>, selected: Option<T>) -> Option<T> {
        match event {
            ListboxEvent::Open => self.open(selected),
            ListboxEvent::Close => self.close(),
            ListboxEvent::Toggle => {
                if self.is_open() {
                    self.close();
                } else {
                    self.open(selected);
                }
            }
            ListboxEvent::Next => self.step(|i, last| (i + 1).min(last), |_| 0),
            ListboxEvent::Previous => self.step(|i, _| i.saturating_sub(1), |last| last),
            ListboxEvent::First => self.set_active(Some(0)),
            ListboxEvent::Last => self.set_active(self.options.len().checked_sub(1)),
            ListboxEvent::Activate(option) => {
                let index = self.index_of(option);
                self.set_active(index);
            }
            ListboxEvent::Deactivate => self.set_active(None),
            ListboxEvent::Select(option) => {
                if self.index_of(option).is_some() {
                    self.close();
                    return Some(option);
                }
            }
            ListboxEvent::SelectActive => {
                let chosen = self.active();
                if chosen.is_some() {
                    self.close();
                }
                return chosen;
            }
        }
        None
    }

    fn open(&mut self, selected: Option<T>) {
        if self.is_open() {
            return;
        }
        let active = selected
            .and_then(|s| self.index_of(s))
            .or(if self.options.is_empty() { None } else { Some(0) });
        self.state = ListboxState::Open { active };
        log::debug!("Listbox opened");
    }

    fn close(&mut self) {
        if self.is_open() {
            self.state = ListboxState::Closed;
            log::debug!("Listbox closed");
        }
    }

    fn set_active(&mut self, active: Option<usize>) {
        if let ListboxState::Open { active: current } = &mut self.state {
            *current = active;
        }
    }

    /// Move the active entry. `from_none` picks the entry when nothing is
    /// active, given the last index.
    fn step(
        &mut self,
        next: impl Fn(usize, usize) -> usize,
        from_none: impl Fn(usize) -> usize,
    ) {
        let Some(last) = self.options.len().checked_sub(1) else {
            return;
        };
        if let ListboxState::Open { active } = &mut self.state {
            *active = Some(match *active {
                Some(i) => next(i, last),
                None => from_none(last),
            });
        }
    }

    fn index_of(&self, option: T) -> Option<usize> {
        self.options.iter().position(|o| *o == option)
    }
}
