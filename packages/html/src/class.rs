use weft_core::Modifier;

/// Set and replace all existing class definitions.
///
/// Zero names leaves the element alone, a single name is assigned as is, and several names are joined with
/// a single space.
pub fn class<I>(classes: I) -> Modifier
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let classes: Vec<String> = classes.into_iter().map(Into::into).collect();
    Modifier::new(move |el| match classes.as_slice() {
        [] => {}
        [single] => el.set_class_name(single),
        many => el.set_class_name(&many.join(" ")),
    })
}

/// Append each given class.
///
/// A name containing spaces is split into separate tokens; see [`split_added_classes`].
pub fn add_class<I>(classes: I) -> Modifier
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let classes: Vec<String> = classes.into_iter().map(Into::into).collect();
    Modifier::new(move |el| {
        for class in &classes {
            for token in split_added_classes(class) {
                el.add_class(token);
            }
        }
    })
}

/// Remove each given class.
///
/// A name containing spaces is split into separate tokens; see [`split_removed_classes`].
pub fn remove_class<I>(classes: I) -> Modifier
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let classes: Vec<String> = classes.into_iter().map(Into::into).collect();
    Modifier::new(move |el| {
        for class in &classes {
            for token in split_removed_classes(class) {
                el.remove_class(token);
            }
        }
    })
}

/// The tokens [`add_class`] adds for one class name.
///
/// Without a space the name is used unchanged. Otherwise it is split on `' '`, each piece is trimmed and
/// empty pieces are dropped, so `"a  b"` yields `["a", "b"]`.
pub fn split_added_classes(class: &str) -> Vec<&str> {
    if !class.contains(' ') {
        return vec![class];
    }

    class
        .split(' ')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// The tokens [`remove_class`] removes for one class name.
///
/// Without a space the name is used unchanged. Otherwise it is split on `' '` with no trimming and no
/// filtering, so `"a  b"` yields `["a", "", "b"]`. Unlike [`split_added_classes`], empty pieces reach the
/// element.
pub fn split_removed_classes(class: &str) -> Vec<&str> {
    if !class.contains(' ') {
        return vec![class];
    }

    class.split(' ').collect()
}
