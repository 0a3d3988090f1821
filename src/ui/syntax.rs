use crate::model::Language;
use egui_code_editor::Syntax;

/// Resaltado del editor para cada etiqueta de lenguaje.
pub fn syntax_for(language: Language) -> Syntax {
    match language {
        Language::Go => go_syntax(),
        Language::JavaScript => javascript_syntax(),
        Language::Python => Syntax::python(),
        Language::Html => html_syntax(),
        Language::Css => css_syntax(),
        Language::Java => java_syntax(),
        Language::Cpp => cpp_syntax(),
    }
}

pub fn go_syntax() -> Syntax {
    Syntax::new("go")
        .with_comment("//")
        .with_comment_multiline(["/*", "*/"])
        .with_keywords([
            "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
            "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
            "return", "select", "struct", "switch", "type", "var",
        ])
        .with_types([
            "bool", "byte", "error", "float32", "float64", "int", "int8", "int16", "int32",
            "int64", "rune", "string", "uint", "uint8", "uint16", "uint32", "uint64",
        ])
        .with_special(["nil", "true", "false", "iota"])
}

pub fn javascript_syntax() -> Syntax {
    Syntax::new("javascript")
        .with_comment("//")
        .with_comment_multiline(["/*", "*/"])
        .with_keywords([
            "async", "await", "break", "case", "catch", "class", "const", "continue", "default",
            "do", "else", "export", "extends", "for", "function", "if", "import", "in", "let",
            "new", "of", "return", "switch", "throw", "try", "typeof", "var", "while", "yield",
        ])
        .with_types(["Array", "Boolean", "Map", "Number", "Object", "Promise", "Set", "String"])
        .with_special(["null", "undefined", "true", "false", "this"])
}

pub fn html_syntax() -> Syntax {
    Syntax::new("html")
        .with_comment_multiline(["<!--", "-->"])
        .with_keywords([
            "html", "head", "body", "div", "span", "p", "a", "ul", "ol", "li", "img", "section",
            "header", "footer", "nav", "main", "form", "input", "button", "script", "style",
            "title", "meta", "link",
        ])
}

pub fn css_syntax() -> Syntax {
    Syntax::new("css")
        .with_comment_multiline(["/*", "*/"])
        .with_keywords([
            "color", "background", "margin", "padding", "border", "display", "flex", "grid",
            "width", "height", "font-size", "font-family", "position", "top", "left", "right",
            "bottom",
        ])
        .with_special(["!important", "auto", "none", "inherit"])
}

pub fn java_syntax() -> Syntax {
    Syntax::new("java")
        .with_comment("//")
        .with_comment_multiline(["/*", "*/"])
        .with_keywords([
            "abstract", "break", "case", "catch", "class", "continue", "default", "do", "else",
            "extends", "final", "for", "if", "implements", "import", "interface", "new",
            "package", "private", "protected", "public", "return", "static", "switch", "this",
            "throw", "throws", "try", "void", "while",
        ])
        .with_types([
            "boolean", "byte", "char", "double", "float", "int", "long", "short", "String",
        ])
        .with_special(["null", "true", "false"])
}

pub fn cpp_syntax() -> Syntax {
    Syntax::new("cpp")
        .with_comment("//")
        .with_comment_multiline(["/*", "*/"])
        .with_keywords([
            "auto", "break", "case", "class", "const", "continue", "default", "delete", "do",
            "else", "enum", "for", "if", "include", "namespace", "new", "private", "protected",
            "public", "return", "sizeof", "static", "struct", "switch", "template", "typedef",
            "using", "virtual", "while",
        ])
        .with_types([
            "bool", "char", "double", "float", "int", "long", "short", "size_t", "std", "string",
            "unsigned", "void",
        ])
        .with_special(["nullptr", "true", "false"])
}
