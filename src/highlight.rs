//! Highlight ranges as delivered by the analyzer.
//!
//! A [`HighlightRange`] is immutable: it records the span a category applied to
//! when the analyzer computed it. The live, edit-adjusted counterpart is
//! [`crate::tracking::TrackedRange`].

use serde::{Deserialize, Serialize};

/// Kind of a highlighted region, as reported by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Annotation,
    BuiltIn,
    Class,
    CommentBlock,
    CommentDocumentation,
    CommentEndOfLine,
    Constructor,
    Directive,
    DynamicLocalVariableDeclaration,
    DynamicLocalVariableReference,
    DynamicParameterDeclaration,
    DynamicParameterReference,
    Enum,
    EnumConstant,
    FunctionTypeAlias,
    IdentifierDefault,
    ImportPrefix,
    InstanceFieldDeclaration,
    InstanceFieldReference,
    InstanceGetterDeclaration,
    InstanceGetterReference,
    InstanceMethodDeclaration,
    InstanceMethodReference,
    InstanceSetterDeclaration,
    InstanceSetterReference,
    InvalidStringEscape,
    Keyword,
    Label,
    LiteralBoolean,
    LiteralDouble,
    LiteralInteger,
    LiteralList,
    LiteralMap,
    LiteralString,
    LocalFunctionDeclaration,
    LocalFunctionReference,
    LocalVariableDeclaration,
    LocalVariableReference,
    ParameterDeclaration,
    ParameterReference,
    StaticFieldDeclaration,
    StaticGetterDeclaration,
    StaticGetterReference,
    StaticMethodDeclaration,
    StaticMethodReference,
    StaticSetterDeclaration,
    StaticSetterReference,
    TopLevelFunctionDeclaration,
    TopLevelFunctionReference,
    TopLevelGetterDeclaration,
    TopLevelGetterReference,
    TopLevelSetterDeclaration,
    TopLevelSetterReference,
    TopLevelVariableDeclaration,
    TypeNameDynamic,
    TypeParameter,
    UnresolvedInstanceMemberReference,
    ValidStringEscape,
}

/// Theme keys a category can resolve to.
pub mod theme_keys {
    pub const ANNOTATION: &str = "annotation";
    pub const BUILTIN: &str = "builtin";
    pub const CLASS: &str = "class";
    pub const CONSTRUCTOR: &str = "constructor";
    pub const DYNAMIC_TYPE: &str = "dynamicType";
    pub const ENUM: &str = "enum";
    pub const ENUM_CONSTANT: &str = "enumConstant";
    pub const FIELD: &str = "field";
    pub const FUNCTION: &str = "function";
    pub const FUNCTION_TYPE_ALIAS: &str = "functionTypeAlias";
    pub const GETTER_DECLARATION: &str = "getterDeclaration";
    pub const IMPORT_PREFIX: &str = "importPrefix";
    pub const LABEL: &str = "label";
    pub const LOCAL_VARIABLE: &str = "localVariable";
    pub const LOCAL_VARIABLE_DECLARATION: &str = "localVariableDeclaration";
    pub const METHOD: &str = "method";
    pub const METHOD_DECLARATION_NAME: &str = "methodDeclarationName";
    pub const NUMBER: &str = "number";
    pub const PARAMETER_VARIABLE: &str = "parameterVariable";
    pub const SETTER_DECLARATION: &str = "setterDeclaration";
    pub const STATIC_FIELD: &str = "staticField";
    pub const STATIC_METHOD: &str = "staticMethod";
    pub const STATIC_METHOD_DECLARATION_NAME: &str = "staticMethodDeclarationName";
    pub const STRING: &str = "string";
    pub const TYPE_PARAMETER: &str = "typeParameter";

    /// Every key some category maps to.
    pub const ALL: &[&str] = &[
        ANNOTATION,
        BUILTIN,
        CLASS,
        CONSTRUCTOR,
        DYNAMIC_TYPE,
        ENUM,
        ENUM_CONSTANT,
        FIELD,
        FUNCTION,
        FUNCTION_TYPE_ALIAS,
        GETTER_DECLARATION,
        IMPORT_PREFIX,
        LABEL,
        LOCAL_VARIABLE,
        LOCAL_VARIABLE_DECLARATION,
        METHOD,
        METHOD_DECLARATION_NAME,
        NUMBER,
        PARAMETER_VARIABLE,
        SETTER_DECLARATION,
        STATIC_FIELD,
        STATIC_METHOD,
        STATIC_METHOD_DECLARATION_NAME,
        STRING,
        TYPE_PARAMETER,
    ];
}

impl Category {
    /// Returns the theme key used to style this category.
    ///
    /// Comments, directives, escapes, collection literals, default identifiers
    /// and unresolved member references have no key: they are left to the
    /// lexical highlighter and never styled here.
    pub fn theme_key(self) -> Option<&'static str> {
        use Category::*;
        use theme_keys as k;

        let key = match self {
            Annotation => k::ANNOTATION,
            BuiltIn | Keyword | LiteralBoolean | TypeNameDynamic => k::BUILTIN,
            Class => k::CLASS,
            Constructor => k::CONSTRUCTOR,
            DynamicLocalVariableDeclaration
            | DynamicLocalVariableReference
            | DynamicParameterDeclaration
            | DynamicParameterReference => k::DYNAMIC_TYPE,
            Enum => k::ENUM,
            EnumConstant => k::ENUM_CONSTANT,
            FunctionTypeAlias => k::FUNCTION_TYPE_ALIAS,
            InstanceFieldDeclaration
            | InstanceFieldReference
            | InstanceGetterReference
            | InstanceSetterReference => k::FIELD,
            InstanceGetterDeclaration | StaticGetterDeclaration | TopLevelGetterDeclaration => {
                k::GETTER_DECLARATION
            }
            InstanceMethodDeclaration
            | LocalFunctionDeclaration
            | TopLevelFunctionDeclaration => k::METHOD_DECLARATION_NAME,
            InstanceMethodReference => k::METHOD,
            InstanceSetterDeclaration | StaticSetterDeclaration | TopLevelSetterDeclaration => {
                k::SETTER_DECLARATION
            }
            ImportPrefix => k::IMPORT_PREFIX,
            Label => k::LABEL,
            LiteralDouble | LiteralInteger => k::NUMBER,
            LiteralString => k::STRING,
            LocalFunctionReference | TopLevelFunctionReference => k::FUNCTION,
            LocalVariableDeclaration => k::LOCAL_VARIABLE_DECLARATION,
            LocalVariableReference => k::LOCAL_VARIABLE,
            StaticFieldDeclaration
            | StaticGetterReference
            | StaticSetterReference
            | TopLevelVariableDeclaration
            | TopLevelGetterReference
            | TopLevelSetterReference => k::STATIC_FIELD,
            StaticMethodReference => k::STATIC_METHOD,
            StaticMethodDeclaration => k::STATIC_METHOD_DECLARATION_NAME,
            ParameterDeclaration | ParameterReference => k::PARAMETER_VARIABLE,
            TypeParameter => k::TYPE_PARAMETER,
            CommentBlock
            | CommentDocumentation
            | CommentEndOfLine
            | Directive
            | IdentifierDefault
            | InvalidStringEscape
            | LiteralList
            | LiteralMap
            | UnresolvedInstanceMemberReference
            | ValidStringEscape => return None,
        };
        Some(key)
    }
}

/// A category-tagged span of source text, as computed by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct HighlightRange {
    pub category: Category,
    pub offset: usize,
    pub length: usize,
}

impl HighlightRange {
    pub fn new(category: Category, offset: usize, length: usize) -> Self {
        Self {
            category,
            offset,
            length,
        }
    }

    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.offset + self.length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_and_builtin_share_a_theme_key() {
        assert_eq!(Category::Keyword.theme_key(), Some(theme_keys::BUILTIN));
        assert_eq!(Category::BuiltIn.theme_key(), Some(theme_keys::BUILTIN));
        assert_eq!(Category::LiteralBoolean.theme_key(), Some(theme_keys::BUILTIN));
        assert_eq!(Category::TypeNameDynamic.theme_key(), Some(theme_keys::BUILTIN));
    }

    #[test]
    fn test_comments_and_escapes_are_not_styled() {
        assert_eq!(Category::CommentBlock.theme_key(), None);
        assert_eq!(Category::ValidStringEscape.theme_key(), None);
        assert_eq!(Category::UnresolvedInstanceMemberReference.theme_key(), None);
    }

    #[test]
    fn test_declarations_and_references_map_separately() {
        assert_eq!(
            Category::InstanceMethodDeclaration.theme_key(),
            Some(theme_keys::METHOD_DECLARATION_NAME)
        );
        assert_eq!(
            Category::InstanceMethodReference.theme_key(),
            Some(theme_keys::METHOD)
        );
        assert_eq!(
            Category::LocalVariableDeclaration.theme_key(),
            Some(theme_keys::LOCAL_VARIABLE_DECLARATION)
        );
        assert_eq!(
            Category::LocalVariableReference.theme_key(),
            Some(theme_keys::LOCAL_VARIABLE)
        );
    }

    #[test]
    fn test_category_serializes_in_analyzer_spelling() {
        let json = serde_json::to_string(&Category::TopLevelGetterDeclaration).unwrap();
        assert_eq!(json, "\"TOP_LEVEL_GETTER_DECLARATION\"");

        let range: HighlightRange =
            serde_json::from_str(r#"{"category":"CLASS","offset":6,"length":1}"#).unwrap();
        assert_eq!(range, HighlightRange::new(Category::Class, 6, 1));
        assert_eq!(range.end(), 7);
    }
}
