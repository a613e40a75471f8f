//! Single source of truth for the scaffolded project layout.
//!
//! This module defines WHAT gets created. It has no I/O and no reporting.
//! One file shows the entire tree the tool produces.
//!
//! ```text
//! <root>/lib/
//! ├── main.dart                # Entry point (templated)
//! ├── app/                     # App shell: router, theme
//! ├── core/
//! │   ├── constants/
//! │   ├── utils/
//! │   └── widgets/
//! ├── data/
//! │   ├── local/               # Database access
//! │   ├── models/
//! │   └── services/
//! ├── state/                   # Stores
//! └── presentation/
//!     ├── screens/
//!     └── widgets/
//! ```

/// The target root's final path segment must end with this.
pub const REQUIRED_SUFFIX: &str = "to_do";

/// Default generated paths removed before scaffolding.
pub const LEGACY_PATHS: &[&str] = &["lib/main.dart", "test"];

/// Directories created under the root. Order is irrelevant.
pub const DIRECTORIES: &[&str] = &[
    "lib/app",
    "lib/core/constants",
    "lib/core/utils",
    "lib/core/widgets",
    "lib/data/local",
    "lib/data/models",
    "lib/data/services",
    "lib/state",
    "lib/presentation/screens",
    "lib/presentation/widgets",
];

/// The only file seeded with content.
pub const ENTRY_POINT: &str = "lib/main.dart";

pub const ENTRY_POINT_TEMPLATE: &str = r#"import 'package:flutter/material.dart';

void main() {
  runApp(const MyApp());
}

class MyApp extends StatelessWidget {
  const MyApp({Key? key}) : super(key: key);

  @override
  Widget build(BuildContext context) {
    return MaterialApp(
      title: 'Todo App',
      home: Container(), // Placeholder
    );
  }
}
"#;

/// Files written empty, grouped by layer.
pub const PLACEHOLDER_FILES: &[&str] = &[
    // App
    "lib/app/app.dart",
    "lib/app/router.dart",
    "lib/app/theme.dart",
    // Core
    "lib/core/constants/app_strings.dart",
    "lib/core/utils/date_time_helper.dart",
    "lib/core/utils/notification_helper.dart",
    "lib/core/widgets/custom_text_field.dart",
    "lib/core/widgets/task_card.dart",
    "lib/core/widgets/empty_state.dart",
    // Data
    "lib/data/local/database_helper.dart",
    "lib/data/local/task_dao.dart",
    "lib/data/models/task_model.dart",
    "lib/data/services/notification_service.dart",
    "lib/data/services/image_service.dart",
    "lib/data/services/task_service.dart",
    // State
    "lib/state/task_store.dart",
    "lib/state/notification_store.dart",
    // Presentation
    "lib/presentation/screens/home_screen.dart",
    "lib/presentation/screens/add_edit_task_screen.dart",
    "lib/presentation/screens/task_detail_screen.dart",
    "lib/presentation/screens/settings_screen.dart",
    "lib/presentation/widgets/task_form.dart",
    "lib/presentation/widgets/deadline_picker.dart",
    "lib/presentation/widgets/tag_selector.dart",
];

/// Every file the tool writes with its content, entry point first.
pub fn files() -> impl Iterator<Item = (&'static str, &'static str)> {
    std::iter::once((ENTRY_POINT, ENTRY_POINT_TEMPLATE))
        .chain(PLACEHOLDER_FILES.iter().map(|path| (*path, "")))
}

/// Content the manifest assigns to `path`, if it is a manifest file.
pub fn content_for(path: &str) -> Option<&'static str> {
    files()
        .find(|(candidate, _)| *candidate == path)
        .map(|(_, content)| content)
}
