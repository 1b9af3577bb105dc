use crate::sessions::SessionRegistry;
use crate::types::{NocturnError, NocturnResult};

/// Result of resolving which sessions run for a selector, in order
#[derive(Debug, Clone)]
pub struct SessionPlan {
    pub selector: String,
    pub session_ids: Vec<String>,
}

/// Resolve a selector into an ordered execution plan.
///
/// Each matched session is preceded by its required sessions; every id
/// appears at most once, and matched order is preserved. Requirements are a
/// flat single level, so no graph traversal is needed.
pub fn resolve_session_plan(
    registry: &SessionRegistry,
    selector: &str,
) -> NocturnResult<SessionPlan> {
    let matched = registry.select(selector);
    if matched.is_empty() {
        return Err(NocturnError::Session(format!(
            "Session '{}' not found",
            selector
        )));
    }

    let mut session_ids: Vec<String> = Vec::new();
    for session in matched {
        for required in &session.requires {
            if registry.get(required).is_none() {
                return Err(NocturnError::Session(format!(
                    "Session '{}' requires unknown session '{}'",
                    session.id, required
                )));
            }
            if !session_ids.contains(required) {
                session_ids.push(required.clone());
            }
        }
        if !session_ids.contains(&session.id) {
            session_ids.push(session.id.clone());
        }
    }

    Ok(SessionPlan {
        selector: selector.to_string(),
        session_ids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::versions::PythonVersion;

    fn registry() -> SessionRegistry {
        SessionRegistry::builtin(&[
            PythonVersion { major: 3, minor: 9 },
            PythonVersion {
                major: 3,
                minor: 10,
            },
        ])
    }

    #[test]
    fn required_sessions_run_first() {
        let plan = resolve_session_plan(&registry(), "ruff(check)").unwrap();
        assert_eq!(plan.session_ids, vec!["uv", "ruff(check)"]);
    }

    #[test]
    fn uv_plan_is_just_uv() {
        let plan = resolve_session_plan(&registry(), "uv").unwrap();
        assert_eq!(plan.session_ids, vec!["uv"]);
    }

    #[test]
    fn base_name_expands_with_requirements_deduplicated() {
        let plan = resolve_session_plan(&registry(), "pytest").unwrap();
        assert_eq!(plan.session_ids, vec!["uv", "pytest-3.9", "pytest-3.10"]);

        let plan = resolve_session_plan(&registry(), "ruff").unwrap();
        assert_eq!(plan.session_ids, vec!["uv", "ruff(check)", "ruff(format)"]);
    }

    #[test]
    fn unknown_selector_is_an_error() {
        let err = resolve_session_plan(&registry(), "black").unwrap_err();
        assert!(err.to_string().contains("Session 'black' not found"));
    }
}
