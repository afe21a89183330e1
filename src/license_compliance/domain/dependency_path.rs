//! Dependency path decoding
//!
//! A dependency path identifies one resolved package instance in
//! `pnpm-lock.yaml`. Two spellings exist:
//!
//! - lockfile v5: `/@scope/name/1.0.0_peer@2.0.0`
//! - lockfile v6: `/@scope/name@1.0.0(peer@2.0.0)`

use super::PackageSnapshot;

/// Name and exact version of a resolved package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameVersion {
    pub name: String,
    pub version: String,
}

/// Components of a registry dependency path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDependencyPath {
    pub name: String,
    pub version: String,
    pub peers_suffix: Option<String>,
}

/// Characters that cannot appear in a directory name on every platform pnpm supports
const FORBIDDEN_FILENAME_CHARS: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Splits an optional `@scope/` prefix off a path body
fn split_scope(body: &str) -> Option<(&str, &str)> {
    if body.starts_with('@') {
        let slash = body.find('/')?;
        Some((&body[..=slash], &body[slash + 1..]))
    } else {
        Some(("", body))
    }
}

/// v6 paths separate name and version with `@`, v5 paths with `/`
fn is_v6_body(unscoped: &str) -> bool {
    match (unscoped.find('@'), unscoped.find('/')) {
        (Some(at), Some(slash)) => at < slash,
        (Some(_), None) => true,
        _ => false,
    }
}

/// Parses a registry dependency path into name, version and peer suffix.
///
/// Returns `None` for paths that do not encode a name (tarball URLs, `file:`
/// paths, git hosts); for those the snapshot carries `name`/`version`.
pub fn parse_dependency_path(dep_path: &str) -> Option<ParsedDependencyPath> {
    let body = dep_path.strip_prefix('/').unwrap_or(dep_path);
    if body.starts_with("file:") {
        return None;
    }

    let (core, v6_peers) = match body.find('(') {
        Some(idx) => (&body[..idx], Some(&body[idx..])),
        None => (body, None),
    };
    let (scope, unscoped) = split_scope(core)?;

    let (name, version, peers_suffix) = if is_v6_body(unscoped) {
        let at = unscoped.find('@')?;
        (
            &unscoped[..at],
            &unscoped[at + 1..],
            v6_peers.map(str::to_string),
        )
    } else {
        let slash = unscoped.find('/')?;
        let rest = &unscoped[slash + 1..];
        // registry-qualified v5 paths (`registry.example.com/foo/1.0.0`) are not decodable
        if rest.contains('/') {
            return None;
        }
        match rest.split_once('_') {
            Some((version, peers)) => (&unscoped[..slash], version, Some(peers.to_string())),
            None => (&unscoped[..slash], rest, None),
        }
    };

    if name.is_empty() || version.is_empty() {
        return None;
    }

    Some(ParsedDependencyPath {
        name: format!("{}{}", scope, name),
        version: version.to_string(),
        peers_suffix,
    })
}

/// Decodes the package name and version of a dependency path.
///
/// Snapshot `name`/`version` take precedence; otherwise they are parsed from
/// the path. Undecodable paths fall back to the path itself as the name and an
/// empty version, so a single odd entry never aborts the report.
pub fn name_ver_from_pkg_snapshot(dep_path: &str, snapshot: &PackageSnapshot) -> NameVersion {
    if let Some(name) = snapshot.name.as_ref() {
        return NameVersion {
            name: name.clone(),
            version: snapshot.version.clone().unwrap_or_default(),
        };
    }

    match parse_dependency_path(dep_path) {
        Some(parsed) => NameVersion {
            name: parsed.name,
            version: parsed.version,
        },
        None => NameVersion {
            name: dep_path.trim_start_matches('/').to_string(),
            version: snapshot.version.clone().unwrap_or_default(),
        },
    }
}

/// Maps a dependency path to its directory name inside the virtual store
/// (`node_modules/.pnpm/<filename>`).
pub fn dep_path_to_filename(dep_path: &str) -> String {
    let unescaped = dep_path_to_filename_unescaped(dep_path);
    let mut filename: String = unescaped
        .chars()
        .map(|c| {
            if FORBIDDEN_FILENAME_CHARS.contains(&c) {
                '+'
            } else {
                c
            }
        })
        .collect();

    if filename.contains('(') {
        filename = filename.replace(")(", "_").replace('(', "_");
        if filename.ends_with(')') {
            filename.pop();
        }
    }

    filename
}

fn dep_path_to_filename_unescaped(dep_path: &str) -> String {
    if dep_path.starts_with("file:") {
        return dep_path.replacen(':', "+", 1);
    }

    let body = dep_path.strip_prefix('/').unwrap_or(dep_path);
    let core_end = body.find('(').unwrap_or(body.len());
    let Some((scope, unscoped)) = split_scope(&body[..core_end]) else {
        return body.to_string();
    };

    if is_v6_body(unscoped) {
        return body.to_string();
    }

    match unscoped.rfind('/') {
        Some(slash) => format!(
            "{}{}@{}{}",
            scope,
            &unscoped[..slash],
            &unscoped[slash + 1..],
            &body[core_end..]
        ),
        None => body.to_string(),
    }
}
