//! Bodies of the generated files: per-window markup/script/style, the shared
//! script/style written once per project, and the placeholder icon assets.
//!
//! The shared script wires the `data-action` hooks the markup template uses
//! (close, drag-move, drag-resize) against the platform's window API, so a
//! freshly scaffolded window is draggable and closable without any app code.

/// Markup for one window. `script` and `style` are the window's own file
/// names; the shared pair is always one directory up.
pub fn window_html(title: &str, script: &str, style: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
	<meta charset="utf-8">
	<title>{title}</title>
	<link rel="stylesheet" href="../shared.css">
	<link rel="stylesheet" href="{style}">
</head>
<body>
	<header data-action="dragMove-window">
		<h1>{title}</h1>
		<button data-action="close-window">&times;</button>
	</header>
	<main>
	</main>
	<div class="resize-handle" data-action="dragResize-window"></div>
	<script src="../shared.js"></script>
	<script src="{script}"></script>
</body>
</html>
"#
    )
}

pub fn window_js() -> &'static str {
    r#"// Window-specific startup code goes here.
(function () {
	document.addEventListener('DOMContentLoaded', function () {
	}, false);
})();
"#
}

pub fn window_css() -> &'static str {
    r#"/* Window-specific styles go here. */
"#
}

/// Shared event wiring for every window: close buttons, drag-move handles
/// and drag-resize handles, addressed by `data-action` attributes.
pub fn shared_js() -> &'static str {
    r#"(function () {
	document.addEventListener('DOMContentLoaded', function () {
		bind('close-window', 'click', closeWindow);
		bind('dragMove-window', 'mousedown', dragMove);
		bind('dragResize-window', 'mousedown', function () {
			dragResize('BottomRight');
		});
	}, false);

	function bind(action, event, handler) {
		var nodes = document.querySelectorAll('[data-action="' + action + '"]');
		for (var i = 0; i < nodes.length; i++) {
			nodes[i].addEventListener(event, handler);
		}
	}

	function withCurrentWindow(callback) {
		overwolf.windows.getCurrentWindow(function (result) {
			if (result.status === 'success') {
				callback(result.window.id);
			}
		});
	}

	function closeWindow() {
		withCurrentWindow(function (id) {
			overwolf.windows.close(id);
		});
	}

	function dragMove() {
		withCurrentWindow(function (id) {
			overwolf.windows.dragMove(id);
		});
	}

	function dragResize(edge) {
		withCurrentWindow(function (id) {
			overwolf.windows.dragResize(id, edge);
		});
	}
})();
"#
}

pub fn shared_css() -> &'static str {
    r#"html, body {
	margin: 0;
	padding: 0;
	background: transparent;
	font-family: "Segoe UI", sans-serif;
	user-select: none;
}

header {
	display: flex;
	align-items: center;
	justify-content: space-between;
	cursor: move;
}

.resize-handle {
	position: absolute;
	right: 0;
	bottom: 0;
	width: 12px;
	height: 12px;
	cursor: nwse-resize;
}
"#
}

/// Smallest valid transparent PNG; stands in for real icon artwork until the
/// developer replaces it.
pub fn icon_placeholder() -> &'static [u8] {
    &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
        0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
        0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
        0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ]
}
