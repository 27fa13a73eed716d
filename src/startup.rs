//! Startup sequence: resolve the preference, then discover themes.

use crate::error::LoaderError;
use crate::preference::{PreferenceGate, PreferenceInit, PreferenceStore};
use crate::theme::{
    Document, DiscoveryReport, ThemeApplier, ThemeCatalog, ThemeDiscovery, ThemeRegistrar,
};

/// What startup did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupReport {
    pub preference: PreferenceInit,
    pub discovery: DiscoveryReport,
}

/// Collaborators startup mutates.
pub struct StartupContext<'a, S: ?Sized, A: ?Sized, D: ?Sized, R: ?Sized> {
    pub store: &'a mut S,
    pub applier: &'a mut A,
    pub document: &'a mut D,
    pub registrar: &'a mut R,
}

/// Run the preference gate synchronously, then one discovery pass.
///
/// Discovery activates every theme regardless of the preferred one, so
/// switching later needs no further loading.
pub async fn run_startup<C, S, A, D, R>(
    gate: &PreferenceGate,
    discovery: &mut ThemeDiscovery<C>,
    ctx: StartupContext<'_, S, A, D, R>,
) -> Result<StartupReport, LoaderError>
where
    C: ThemeCatalog,
    S: PreferenceStore + ?Sized,
    A: ThemeApplier + ?Sized,
    D: Document + ?Sized,
    R: ThemeRegistrar + ?Sized,
{
    let preference = gate.resolve(ctx.store, ctx.applier)?;
    let discovery = discovery.run(ctx.document, ctx.registrar).await?;
    tracing::info!(
        preference = preference.theme(),
        themes = discovery.registered.len(),
        "theme startup complete"
    );
    Ok(StartupReport {
        preference,
        discovery,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::preference::MemoryStore;
    use crate::theme::{HeadFragment, StaticCatalog, ThemeCards, ThemeLayout};

    struct ReadOnlyStore;

    impl PreferenceStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Corrupt("read-only".into()))
        }
    }

    fn discovery() -> ThemeDiscovery<StaticCatalog> {
        ThemeDiscovery::new(StaticCatalog::new(
            ThemeLayout::default(),
            vec!["arctic.css".into(), "midnight.css".into()],
        ))
    }

    #[tokio::test]
    async fn first_run_defaults_then_registers_all_themes() {
        let gate = PreferenceGate::new("theme", "arctic");
        let mut store = MemoryStore::new();
        let mut applied = Vec::new();
        let mut apply = |id: &str| applied.push(id.to_string());
        let mut head = HeadFragment::new();
        let mut cards = ThemeCards::new();

        let report = run_startup(
            &gate,
            &mut discovery(),
            StartupContext {
                store: &mut store,
                applier: &mut apply,
                document: &mut head,
                registrar: &mut cards,
            },
        )
        .await
        .expect("startup");

        assert_eq!(report.preference, PreferenceInit::DefaultedTo("arctic".into()));
        assert_eq!(report.discovery.registered, vec!["arctic", "midnight"]);
        assert_eq!(applied, vec!["arctic"]);
        assert_eq!(head.links().len(), 2);
    }

    #[tokio::test]
    async fn storage_failure_stops_before_discovery() {
        let gate = PreferenceGate::new("theme", "arctic");
        let mut discovery = discovery();
        let mut head = HeadFragment::new();
        let mut cards = ThemeCards::new();

        let err = run_startup(
            &gate,
            &mut discovery,
            StartupContext {
                store: &mut ReadOnlyStore,
                applier: &mut |_: &str| {},
                document: &mut head,
                registrar: &mut cards,
            },
        )
        .await
        .expect_err("storage failure");

        assert!(matches!(err, LoaderError::Storage(_)), "got: {err}");
        assert!(head.is_empty());
        assert!(cards.names().is_empty());
    }
}
