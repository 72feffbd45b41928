//! Height locking for the heading and paragraph stacks.
//!
//! Each stack pages by translating a column of items inside a fixed-height
//! viewport. If items differed in height, a translation by `index * height`
//! would show slivers of the neighbours, so the normalizer measures the
//! tallest item and forces the viewport and every item to that height.
//!
//! All DOM access goes through [`ViewPresenter`], which keeps this module free
//! of platform code and lets tests run against an in-memory fake.

use crate::constants::LOCKED_HEIGHT_BUFFER_PX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextStack {
    Heading,
    Paragraph,
}

impl TextStack {
    pub const ALL: [TextStack; 2] = [TextStack::Heading, TextStack::Paragraph];
}

/// Which element(s) of a stack a style change applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTarget {
    /// The clipping viewport around the stack.
    Viewport(TextStack),
    /// Every item inside the stack.
    Items(TextStack),
}

/// A single CSS property assignment. An empty value removes the property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleProp {
    pub name: &'static str,
    pub value: String,
}

impl StyleProp {
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// DOM capabilities the scene needs for the text carousel.
pub trait ViewPresenter {
    /// Number of items in the stack, or `None` when the stack is absent.
    fn item_count(&self, stack: TextStack) -> Option<usize>;
    /// Rendered height of each item, in CSS px. Empty for absent stacks.
    fn measure_items(&self, stack: TextStack) -> Vec<f64>;
    fn set_style(&mut self, target: StyleTarget, props: &[StyleProp]);
    /// Vertically translate the stack inside its viewport.
    fn translate(&mut self, stack: TextStack, offset_px: f32);

    /// Carousel length, taken from the heading stack alone. Without headings
    /// there is no carousel and paragraphs stay on their first item.
    fn carousel_len(&self) -> Option<usize> {
        self.item_count(TextStack::Heading).filter(|n| *n > 0)
    }
}

/// Locked heights per stack, `None` when the stack is absent or unmeasured.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LockedHeights {
    pub heading: Option<f64>,
    pub paragraph: Option<f64>,
}

impl LockedHeights {
    pub fn get(&self, stack: TextStack) -> Option<f64> {
        match stack {
            TextStack::Heading => self.heading,
            TextStack::Paragraph => self.paragraph,
        }
    }

    pub fn set(&mut self, stack: TextStack, height: Option<f64>) {
        match stack {
            TextStack::Heading => self.heading = height,
            TextStack::Paragraph => self.paragraph = height,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ViewportNormalizer {
    buffer_px: f64,
}

impl Default for ViewportNormalizer {
    fn default() -> Self {
        Self::new(LOCKED_HEIGHT_BUFFER_PX)
    }
}

impl ViewportNormalizer {
    pub fn new(buffer_px: f64) -> Self {
        Self { buffer_px }
    }

    pub fn buffer_px(&self) -> f64 {
        self.buffer_px
    }

    /// Locked height for a stack whose tallest item measures `tallest`.
    pub fn lock_height(&self, tallest: f64) -> Option<f64> {
        (tallest.is_finite() && tallest > 0.0).then(|| tallest.ceil() + self.buffer_px)
    }

    /// Measure and lock both stacks.
    pub fn normalize<P: ViewPresenter + ?Sized>(&self, presenter: &mut P) -> LockedHeights {
        let mut locked = LockedHeights::default();
        for stack in TextStack::ALL {
            locked.set(stack, self.normalize_stack(presenter, stack));
        }
        locked
    }

    fn normalize_stack<P: ViewPresenter + ?Sized>(
        &self,
        presenter: &mut P,
        stack: TextStack,
    ) -> Option<f64> {
        match presenter.item_count(stack) {
            Some(n) if n > 0 => {}
            _ => return None,
        }
        // Drop the previous lock so items report their natural height.
        presenter.set_style(StyleTarget::Items(stack), &[StyleProp::new("min-height", "")]);
        let tallest = presenter
            .measure_items(stack)
            .into_iter()
            .fold(0.0_f64, f64::max);
        let locked = self.lock_height(tallest)?;
        presenter.set_style(
            StyleTarget::Viewport(stack),
            &[StyleProp::new("height", format!("{locked}px"))],
        );
        presenter.set_style(StyleTarget::Items(stack), &item_props(stack, locked));
        log::info!("[viewport] {:?} locked at {}px", stack, locked);
        Some(locked)
    }
}

fn item_props(stack: TextStack, locked: f64) -> Vec<StyleProp> {
    let mut props = vec![
        StyleProp::new("min-height", format!("{locked}px")),
        StyleProp::new("display", "flex"),
        StyleProp::new("align-items", "center"),
        StyleProp::new("justify-content", "center"),
    ];
    if stack == TextStack::Paragraph {
        props.push(StyleProp::new("text-align", "center"));
    }
    props
}
