use weft_core::Modifier;

/// Call `f` every time `event` fires on the element.
pub fn add_event_listener(event: impl Into<String>, f: impl FnMut() + 'static) -> Modifier {
    listener(event.into(), false, f)
}

/// Call `f` the first time `event` fires on the element, then drop the listener.
pub fn add_event_listener_once(event: impl Into<String>, f: impl FnMut() + 'static) -> Modifier {
    listener(event.into(), true, f)
}

pub fn add_click_listener(f: impl FnMut() + 'static) -> Modifier {
    add_event_listener("click", f)
}

/// Call `f` with the key code of every `keyup` event.
///
/// Code that used a "key down" listener which actually fired on `keyup` wants this function;
/// [`add_key_down_listener`] listens for `keydown`.
pub fn add_key_up_listener(f: impl FnMut(u32) + 'static) -> Modifier {
    key_listener("keyup", f)
}

/// Call `f` with the key code of every `keydown` event.
pub fn add_key_down_listener(f: impl FnMut(u32) + 'static) -> Modifier {
    key_listener("keydown", f)
}

fn listener(event: String, once: bool, f: impl FnMut() + 'static) -> Modifier {
    Modifier::new(move |el| el.add_event_listener(&event, once, Box::new(f)))
}

fn key_listener(event: &'static str, f: impl FnMut(u32) + 'static) -> Modifier {
    Modifier::new(move |el| el.add_key_listener(event, Box::new(f)))
}
