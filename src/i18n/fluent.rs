// SPDX-License-Identifier: MPL-2.0
//! Fluent bundle construction and message formatting.

use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use unic_langid::LanguageIdentifier;

pub type Bundle = FluentBundle<FluentResource>;

/// Builds a bundle for `locale` from FTL source.
///
/// Returns `None` (and logs) if the source has syntax errors or duplicate
/// message ids.
pub fn build_bundle(locale: &LanguageIdentifier, source: String) -> Option<Bundle> {
    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((_, errors)) => {
            tracing::warn!(%locale, count = errors.len(), "Skipping FTL file with syntax errors");
            return None;
        }
    };
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Isolation marks show up as stray glyphs in the UI.
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(%locale, count = errors.len(), "Skipping FTL file with conflicting messages");
        return None;
    }
    Some(bundle)
}

/// Formats `key` with optional named arguments.
///
/// Returns `None` if the message is absent or formatting reports errors.
pub fn format(bundle: &Bundle, key: &str, args: &[(&str, &str)]) -> Option<String> {
    let message = bundle.get_message(key)?;
    let pattern = message.value()?;

    let fluent_args = (!args.is_empty()).then(|| {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, to_fluent_value(value));
        }
        fluent_args
    });

    let mut errors = vec![];
    let value = bundle.format_pattern(pattern, fluent_args.as_ref(), &mut errors);
    errors.is_empty().then(|| value.into_owned())
}

/// Numeric arguments become Fluent numbers so plural selectors work.
fn to_fluent_value(value: &str) -> FluentValue<'static> {
    match value.parse::<f64>() {
        Ok(number) => FluentValue::from(number),
        Err(_) => FluentValue::from(value.to_string()),
    }
}
