use crate::constants::*;
use crate::core::{StyleProp, StyleTarget, TextStack, ViewPresenter};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Viewport and stack elements for one text column.
struct StackElements {
    viewport: web::HtmlElement,
    stack: web::HtmlElement,
}

impl StackElements {
    fn lookup(document: &web::Document, viewport_id: &str, stack_id: &str) -> Option<Self> {
        let viewport = document
            .get_element_by_id(viewport_id)?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        let stack = document
            .get_element_by_id(stack_id)?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        Some(Self { viewport, stack })
    }

    fn items(&self) -> Vec<web::HtmlElement> {
        let children = self.stack.children();
        (0..children.length())
            .filter_map(|i| children.item(i))
            .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
            .collect()
    }
}

/// [`ViewPresenter`] over the page's heading and paragraph stacks. Missing
/// elements leave the corresponding stack absent.
pub struct DomPresenter {
    heading: Option<StackElements>,
    paragraph: Option<StackElements>,
}

impl DomPresenter {
    pub fn new(document: &web::Document) -> Self {
        let heading = StackElements::lookup(document, HEADING_VIEWPORT_ID, HEADING_STACK_ID);
        let paragraph =
            StackElements::lookup(document, PARAGRAPH_VIEWPORT_ID, PARAGRAPH_STACK_ID);
        if heading.is_none() {
            log::warn!("[dom] heading stack missing; carousel headings disabled");
        }
        if paragraph.is_none() {
            log::warn!("[dom] paragraph stack missing; carousel paragraphs disabled");
        }
        Self { heading, paragraph }
    }

    fn elements(&self, stack: TextStack) -> Option<&StackElements> {
        match stack {
            TextStack::Heading => self.heading.as_ref(),
            TextStack::Paragraph => self.paragraph.as_ref(),
        }
    }
}

fn apply_props(el: &web::HtmlElement, props: &[StyleProp]) {
    let style = el.style();
    for p in props {
        if p.value.is_empty() {
            _ = style.remove_property(p.name);
        } else {
            _ = style.set_property(p.name, &p.value);
        }
    }
}

impl ViewPresenter for DomPresenter {
    fn item_count(&self, stack: TextStack) -> Option<usize> {
        self.elements(stack)
            .map(|e| e.stack.children().length() as usize)
    }

    fn measure_items(&self, stack: TextStack) -> Vec<f64> {
        self.elements(stack)
            .map(|e| {
                e.items()
                    .iter()
                    .map(|el| el.get_bounding_client_rect().height())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn set_style(&mut self, target: StyleTarget, props: &[StyleProp]) {
        match target {
            StyleTarget::Viewport(stack) => {
                if let Some(e) = self.elements(stack) {
                    apply_props(&e.viewport, props);
                }
            }
            StyleTarget::Items(stack) => {
                if let Some(e) = self.elements(stack) {
                    for item in e.items() {
                        apply_props(&item, props);
                    }
                }
            }
        }
    }

    fn translate(&mut self, stack: TextStack, offset_px: f32) {
        if let Some(e) = self.elements(stack) {
            _ = e
                .stack
                .style()
                .set_property("transform", &format!("translate3d(0px, {offset_px}px, 0px)"));
        }
    }
}
