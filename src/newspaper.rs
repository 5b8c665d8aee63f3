// The paper and reader from the classic observer walkthrough: the paper
// publishes daily and monthly issues, the reader reacts to each.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::PublishError;
use crate::pubsub::{Handler, Publish, Publisher};

pub const MONTHLY: &str = "monthly";

/// Lines produced by readers, in the order they were written.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Rc<RefCell<Vec<String>>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&self, line: impl Into<String>) {
        self.lines.borrow_mut().push(line.into());
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Removes and returns everything written so far.
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.borrow_mut())
    }
}

// ============================================================================
// Paper
// ============================================================================

#[derive(Debug, Default)]
pub struct Paper {
    publisher: Publisher<String>,
}

impl Paper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn daily(&self) -> Result<(), PublishError> {
        self.publish(&"big news today".to_string())
    }

    pub fn monthly(&self) -> Result<(), PublishError> {
        self.publish_to(&"interesting analysis".to_string(), MONTHLY)
    }
}

impl Publish<String> for Paper {
    fn publisher(&self) -> &Publisher<String> {
        &self.publisher
    }

    fn publisher_mut(&mut self) -> &mut Publisher<String> {
        &mut self.publisher
    }
}

// ============================================================================
// Reader
// ============================================================================

/// A subscriber with one handler per kind of issue.
pub struct Reader {
    pub drink_coffee: Handler<String>,
    pub sunday_pre_nap: Handler<String>,
}

impl Reader {
    pub fn new(transcript: &Transcript) -> Self {
        let out = transcript.clone();
        let drink_coffee = Handler::new(move |paper: &String| {
            out.write(format!("Just read {paper}"));
        });

        let out = transcript.clone();
        let sunday_pre_nap = Handler::new(move |monthly: &String| {
            out.write(format!("About to fall asleep reading this {monthly}"));
        });

        Self {
            drink_coffee,
            sunday_pre_nap,
        }
    }

    /// Coffee with every daily issue, a nap with every monthly one.
    pub fn subscribe_to(&self, paper: &mut impl Publish<String>) {
        paper.subscribe(self.drink_coffee.clone());
        paper.subscribe_to(self.sunday_pre_nap.clone(), MONTHLY);
    }

    pub fn unsubscribe_from(&self, paper: &mut impl Publish<String>) {
        paper.unsubscribe(&self.drink_coffee);
        paper.unsubscribe_from(&self.sunday_pre_nap, MONTHLY);
    }
}
