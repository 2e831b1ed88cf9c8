use serde_json::Value;

use super::{
    Builder, Completeness, GITHUB_ACTIONS_WORKFLOW_RECIPE_TYPE, Item, Metadata, Predicate, Recipe,
};
use crate::github::AnyContext;
use crate::hash;

pub const GITHUB_BASE_URI: &str = "https://github.com/";

/// Recorded arguments are exhaustive; environment and materials are not.
pub const COMPLETENESS_V01: Completeness = Completeness {
    arguments: true,
    environment: false,
    materials: false,
};

pub fn make_repo_uri(repository: &str) -> String {
    format!("{GITHUB_BASE_URI}{repository}")
}

pub fn make_builder_v01(id: &str) -> Builder {
    Builder { id: id.to_string() }
}

pub fn make_build_metadata_v01(invocation_id: &str, finished_on: &str) -> Metadata {
    Metadata {
        build_invocation_id: invocation_id.to_string(),
        completeness: COMPLETENESS_V01,
        reproducible: false,
        build_finished_on: finished_on.to_string(),
    }
}

// the recipe always lives in the first material (the source repository)
pub fn make_recipe_v01(
    entry_point: &str,
    arguments: Value,
    environment: Option<AnyContext>,
) -> Recipe {
    Recipe {
        recipe_type: GITHUB_ACTIONS_WORKFLOW_RECIPE_TYPE.to_string(),
        defined_in_material: 0,
        entry_point: entry_point.to_string(),
        arguments,
        environment,
    }
}

/// The source commit material: `git+<repo uri>` pinned by its sha1.
pub fn make_git_material_v01(repo_uri: &str, commit_sha: &str) -> Item {
    Item {
        uri: format!("git+{repo_uri}"),
        digest: hash::digest_set(hash::SHA1, commit_sha),
    }
}

pub fn generate_build_provenance_v01(
    builder: Builder,
    metadata: Metadata,
    recipe: Recipe,
    materials: Vec<Item>,
) -> Predicate {
    Predicate {
        builder,
        metadata,
        recipe,
        materials,
    }
}
