//! Generated UnrealBuildTool source templates.
//!
//! The project name lands in C# class-name position, so it is embedded
//! verbatim; the two version-dependent constants come from [`BuildConfig`].
//! Files are written without a trailing newline, matching what
//! UnrealBuildTool's own generators emit.

use crate::domain::BuildConfig;

/// `Source/<Name>/<Name>.Build.cs`: the game module's ModuleRules.
pub fn module_rules(project: &str) -> String {
    format!(
        r#"// Copyright Epic Games, Inc. All Rights Reserved.

using UnrealBuildTool;

public class {project} : ModuleRules
{{
	public {project}(ReadOnlyTargetRules Target) : base(Target)
	{{
		PCHUsage = PCHUsageMode.UseExplicitOrSharedPCHs;

		PublicDependencyModuleNames.AddRange(new string[] {{ "Core", "CoreUObject", "Engine", "InputCore" }});

		PrivateDependencyModuleNames.AddRange(new string[] {{  }});
	}}
}}"#
    )
}

/// `Source/<Name>.Target.cs`: the game TargetRules.
pub fn game_target(project: &str, config: &BuildConfig) -> String {
    target_rules(project, config, "Game", "")
}

/// `Source/<Name>Editor.Target.cs`: the editor TargetRules.
pub fn editor_target(project: &str, config: &BuildConfig) -> String {
    target_rules(project, config, "Editor", "Editor")
}

fn target_rules(project: &str, config: &BuildConfig, target_type: &str, suffix: &str) -> String {
    let settings = config.build_settings();
    let order = config.include_order();
    format!(
        r#"// Copyright Epic Games, Inc. All Rights Reserved.

using UnrealBuildTool;
using System.Collections.Generic;

public class {project}{suffix}Target : TargetRules
{{
	public {project}{suffix}Target(TargetInfo Target) : base(Target)
	{{
		Type = TargetType.{target_type};
		DefaultBuildSettings = BuildSettingsVersion.{settings};
		IncludeOrderVersion = EngineIncludeOrderVersion.{order};
		ExtraModuleNames.Add("{project}");
	}}
}}"#
    )
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::resolve;

    #[test]
    fn module_rules_names_the_project_class() {
        let content = module_rules("Demo");
        assert!(content.contains("public class Demo : ModuleRules"));
        assert!(content.contains("public Demo(ReadOnlyTargetRules Target)"));
        assert!(content.contains("\"Core\", \"CoreUObject\", \"Engine\", \"InputCore\""));
    }

    #[test]
    fn game_target_embeds_the_resolved_constants() {
        let config = resolve("5.3").unwrap();
        let content = game_target("Demo", &config);
        assert!(content.contains("public class DemoTarget : TargetRules"));
        assert!(content.contains("Type = TargetType.Game;"));
        assert!(content.contains("DefaultBuildSettings = BuildSettingsVersion.V4;"));
        assert!(content.contains("IncludeOrderVersion = EngineIncludeOrderVersion.Unreal5_3;"));
        assert!(content.contains("ExtraModuleNames.Add(\"Demo\");"));
    }

    #[test]
    fn editor_target_differs_only_in_class_and_type() {
        let config = resolve("5.6").unwrap();
        let content = editor_target("Demo", &config);
        assert!(content.contains("public class DemoEditorTarget : TargetRules"));
        assert!(content.contains("Type = TargetType.Editor;"));
        assert!(content.contains("EngineIncludeOrderVersion.Unreal5_6;"));
    }

    #[test]
    fn latest_sentinel_renders_for_unenumerated_minors() {
        let config = resolve("5.12").unwrap();
        let content = game_target("Demo", &config);
        assert!(content.contains("BuildSettingsVersion.Latest;"));
        assert!(content.contains("EngineIncludeOrderVersion.Latest;"));
    }

    #[test]
    fn templates_have_no_trailing_newline() {
        let config = resolve("5.0").unwrap();
        for content in [
            module_rules("Demo"),
            game_target("Demo", &config),
            editor_target("Demo", &config),
        ] {
            assert!(content.starts_with("// Copyright Epic Games"));
            assert!(content.ends_with('}'));
        }
    }
}
