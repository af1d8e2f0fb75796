//! Mounting the carousel onto a loaded card page
//!
//! The card pages are static documents; the carousel attaches to the elements
//! they already contain. The container is a precondition of the page and its
//! absence aborts the mount. Either trigger may be missing.

use carousel_core::{CarouselConfig, CarouselController};
use js_sys::Function;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Window, console};

use crate::dom::{DomIllustrations, DomTrigger, document, window};
use crate::error::{Result, UiError};

/// Attaches a carousel to the elements named in `config`
///
/// # Errors
///
/// Returns an error if:
/// - The config fails validation
/// - No window or document is available
/// - The container element does not exist
/// - The browser refuses a click listener
pub fn mount_carousel(config: &CarouselConfig) -> Result<CarouselController<DomIllustrations>> {
    config.validate()?;

    let document = document(&window()?)?;
    let container = document
        .get_element_by_id(&config.container_id)
        .ok_or_else(|| UiError::ElementNotFound {
            id: config.container_id.clone(),
        })?;

    let previous = DomTrigger::find(&document, &config.previous_id);
    let next = DomTrigger::find(&document, &config.next_id);

    let controller = CarouselController::initialize(
        DomIllustrations::new(container, config.open_class.as_str()),
        previous.as_ref(),
        next.as_ref(),
    )?;

    if config.render_on_init {
        controller.render()?;
    }

    let wiring = controller.wiring();
    console::log_1(
        &format!(
            "Card carousel mounted on #{} (previous: {}, next: {})",
            config.container_id, wiring.previous, wiring.next
        )
        .into(),
    );

    Ok(controller)
}

/// Logs a failed mount to the console
///
/// Pages without a carousel container are common (only card pages carry
/// one), so that case is informational rather than an error.
pub fn report_mount_failure(error: &UiError) {
    if error.is_missing_element() {
        console::log_1(&format!("No card carousel on this page: {error}").into());
    } else {
        console::error_1(&format!("Card carousel not mounted: {error}").into());
    }
}

/// Mounts once the document has finished loading
///
/// Mounts immediately if the document is already complete, otherwise on the
/// window `load` event. Mount failures after load are reported to the console.
///
/// # Errors
///
/// Returns an error if no window/document is available, if the `load`
/// listener cannot be attached, or if an immediate mount fails.
pub fn mount_when_loaded(config: CarouselConfig) -> Result<()> {
    let window = window()?;
    let document = document(&window)?;

    if document.ready_state() == "complete" {
        return mount_carousel(&config).map(|_| ());
    }

    mount_on_load(&window, config)
}

/// Defers the mount to the next window `load` event
///
/// # Errors
///
/// Returns [`UiError::Listener`] if the browser refuses the listener.
pub fn mount_on_load(window: &Window, config: CarouselConfig) -> Result<()> {
    let on_load = Closure::once_into_js(move || {
        if let Err(e) = mount_carousel(&config) {
            report_mount_failure(&e);
        }
    });

    let options = AddEventListenerOptions::new();
    options.set_once(true);

    window
        .add_event_listener_with_callback_and_add_event_listener_options(
            "load",
            on_load.unchecked_ref::<Function>(),
            &options,
        )
        .map_err(|e| UiError::Listener(format!("{e:?}")))
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod tests {
    use super::*;
    use carousel_core::{ActiveIndex, Direction, Programmatic};
    use wasm_bindgen_test::*;
    use web_sys::{Element, Event, EventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    /// Builds `<div id=container><img>..</div>` plus optional triggers under body
    fn build_page(
        prefix: &str,
        children: u32,
        with_previous: bool,
        with_next: bool,
    ) -> std::result::Result<(CarouselConfig, Element), Box<dyn std::error::Error>> {
        let document = document(&window()?)?;
        let body = document.body().ok_or("No body element")?;

        let config = CarouselConfig {
            container_id: format!("{prefix}-illustrations"),
            previous_id: format!("{prefix}-left"),
            next_id: format!("{prefix}-right"),
            ..CarouselConfig::default()
        };

        let container = document.create_element("div").map_err(|e| format!("{e:?}"))?;
        container.set_id(&config.container_id);
        for _ in 0..children {
            let child = document.create_element("img").map_err(|e| format!("{e:?}"))?;
            container.append_child(&child).map_err(|e| format!("{e:?}"))?;
        }
        body.append_child(&container).map_err(|e| format!("{e:?}"))?;

        for (present, id) in [(with_previous, &config.previous_id), (with_next, &config.next_id)] {
            if present {
                let trigger = document.create_element("a").map_err(|e| format!("{e:?}"))?;
                trigger.set_id(id);
                trigger.set_attribute("href", "#").map_err(|e| format!("{e:?}"))?;
                body.append_child(&trigger).map_err(|e| format!("{e:?}"))?;
            }
        }

        Ok((config, container))
    }

    fn open_positions(container: &Element) -> Vec<u32> {
        let children = container.children();
        (0..children.length())
            .filter(|i| {
                children
                    .item(*i)
                    .is_some_and(|child| child.class_list().contains("open"))
            })
            .collect()
    }

    fn click(config_id: &str) -> TestResult {
        let document = document(&window()?)?;
        let element = document
            .get_element_by_id(config_id)
            .ok_or("trigger missing")?
            .dyn_into::<web_sys::HtmlElement>()
            .map_err(|_| "trigger is not an HtmlElement")?;
        element.click();
        Ok(())
    }

    #[wasm_bindgen_test]
    fn test_mount_does_not_render() -> TestResult {
        let (config, container) = build_page("mount-a", 3, true, true)?;
        let controller = mount_carousel(&config)?;
        assert!(controller.wiring().previous);
        assert!(open_positions(&container).is_empty());
        Ok(())
    }

    #[wasm_bindgen_test]
    fn test_clicks_rotate_open_class() -> TestResult {
        let (config, container) = build_page("mount-b", 3, true, true)?;
        let _controller = mount_carousel(&config)?;

        click(&config.next_id)?;
        assert_eq!(open_positions(&container), vec![1]);
        click(&config.previous_id)?;
        click(&config.previous_id)?;
        assert_eq!(open_positions(&container), vec![2]);
        Ok(())
    }

    /// Dispatches a cancelable click the way a browser does for a real one
    fn dispatch_click(id: &str) -> std::result::Result<Event, Box<dyn std::error::Error>> {
        let document = document(&window()?)?;
        let element = document.get_element_by_id(id).ok_or("trigger missing")?;

        let init = EventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        let event =
            Event::new_with_event_init_dict("click", &init).map_err(|e| format!("{e:?}"))?;
        element.dispatch_event(&event).map_err(|e| format!("{e:?}"))?;
        Ok(event)
    }

    #[wasm_bindgen_test]
    fn test_click_default_is_prevented() -> TestResult {
        let (config, container) = build_page("mount-e", 3, true, true)?;
        let _controller = mount_carousel(&config)?;

        let event = dispatch_click(&config.next_id)?;
        assert!(event.default_prevented());
        assert_eq!(open_positions(&container), vec![1]);

        let event = dispatch_click(&config.previous_id)?;
        assert!(event.default_prevented());
        assert_eq!(open_positions(&container), vec![0]);
        Ok(())
    }

    #[wasm_bindgen_test]
    fn test_mount_waits_for_load_event() -> TestResult {
        let (config, container) = build_page("mount-f", 3, true, true)?;
        let window = window()?;
        mount_on_load(&window, config.clone())?;

        // not wired until load fires
        let event = dispatch_click(&config.next_id)?;
        assert!(!event.default_prevented());
        assert!(open_positions(&container).is_empty());

        let load = Event::new("load").map_err(|e| format!("{e:?}"))?;
        window.dispatch_event(&load).map_err(|e| format!("{e:?}"))?;

        let event = dispatch_click(&config.next_id)?;
        assert!(event.default_prevented());
        assert_eq!(open_positions(&container), vec![1]);
        Ok(())
    }

    #[wasm_bindgen_test]
    fn test_missing_container() -> TestResult {
        let config = CarouselConfig {
            container_id: "mount-missing".to_string(),
            ..CarouselConfig::default()
        };
        assert_eq!(
            mount_carousel(&config).map(|_| ()),
            Err(UiError::ElementNotFound {
                id: "mount-missing".to_string()
            })
        );
        Ok(())
    }

    #[wasm_bindgen_test]
    fn test_missing_previous_trigger() -> TestResult {
        let (config, container) = build_page("mount-c", 4, false, true)?;
        let controller = mount_carousel(&config)?;
        assert!(!controller.wiring().previous);

        controller.activate(Direction::Next, &Programmatic)?;
        assert_eq!(open_positions(&container), vec![1]);
        assert_eq!(controller.active()?, ActiveIndex::new(1));
        Ok(())
    }

    #[wasm_bindgen_test]
    fn test_render_on_init() -> TestResult {
        let (mut config, container) = build_page("mount-d", 2, true, true)?;
        config.render_on_init = true;
        let _controller = mount_carousel(&config)?;
        assert_eq!(open_positions(&container), vec![0]);
        Ok(())
    }
}
