//! Message catalogue.
//!
//! `Syntax` messages are reported after a description of the offending
//! token ("Unexpected token ')'. Expected ..."), `Semantic` ones are not.

use super::{DiagnosticCategory, DiagnosticMessage};

macro_rules! diag {
    ($code:expr, Syntax, $msg:expr) => {
        DiagnosticMessage { code: $code, category: DiagnosticCategory::Syntax, message: $msg }
    };
    ($code:expr, Semantic, $msg:expr) => {
        DiagnosticMessage { code: $code, category: DiagnosticCategory::Semantic, message: $msg }
    };
}

pub const STACK_EXHAUSTED: DiagnosticMessage = diag!(1000, Semantic, "Stack exhausted");
pub const PARSER_ERROR: DiagnosticMessage = diag!(1001, Syntax, "Parser error");
pub const PARSE_ERROR: DiagnosticMessage = diag!(1002, Syntax, "Parse error");

// ============================================================================
// Unexpected token descriptions (1010-1049)
// ============================================================================

pub const UNEXPECTED_END_OF_SCRIPT: DiagnosticMessage = diag!(1010, Syntax, "Unexpected end of script");
pub const INCOMPLETE_UNICODE_ESCAPE: DiagnosticMessage = diag!(1011, Syntax, "Incomplete unicode escape in identifier: '{0}'");
pub const UNTERMINATED_MULTILINE_COMMENT: DiagnosticMessage = diag!(1012, Syntax, "Unterminated multiline comment");
pub const UNTERMINATED_NUMERIC_LITERAL: DiagnosticMessage = diag!(1013, Syntax, "Unterminated numeric literal '{0}'");
pub const UNTERMINATED_STRING_LITERAL: DiagnosticMessage = diag!(1014, Syntax, "Unterminated string literal '{0}'");
pub const UNTERMINATED_TEMPLATE_LITERAL: DiagnosticMessage = diag!(1015, Syntax, "Unterminated template literal '{0}'");
pub const INVALID_IDENTIFIER_ESCAPE: DiagnosticMessage = diag!(1016, Syntax, "Invalid escape in identifier: '{0}'");
pub const INVALID_UNICODE_ESCAPE: DiagnosticMessage = diag!(1017, Syntax, "Invalid unicode escape in identifier: '{0}'");
pub const INVALID_NUMERIC_LITERAL: DiagnosticMessage = diag!(1018, Syntax, "Invalid numeric literal: '{0}'");
pub const INVALID_USE_OF_OCTAL: DiagnosticMessage = diag!(1019, Syntax, "Invalid use of octal: '{0}'");
pub const INVALID_STRING_LITERAL: DiagnosticMessage = diag!(1020, Syntax, "Invalid string literal: '{0}'");
pub const UNRECOGNIZED_TOKEN: DiagnosticMessage = diag!(1021, Syntax, "Unrecognized token '{0}'");
pub const UNEXPECTED_STRING: DiagnosticMessage = diag!(1022, Syntax, "Unexpected string literal {0}");
pub const UNEXPECTED_TEMPLATE: DiagnosticMessage = diag!(1023, Syntax, "Unexpected template string");
pub const UNEXPECTED_NUMBER: DiagnosticMessage = diag!(1024, Syntax, "Unexpected number '{0}'");
pub const UNEXPECTED_STRICT_RESERVED_WORD: DiagnosticMessage = diag!(1025, Syntax, "Unexpected use of reserved word '{0}' in strict mode");
pub const UNEXPECTED_RESERVED_WORD: DiagnosticMessage = diag!(1026, Syntax, "Unexpected use of reserved word '{0}'");
pub const UNEXPECTED_IDENTIFIER: DiagnosticMessage = diag!(1027, Syntax, "Unexpected identifier '{0}'");
pub const UNEXPECTED_KEYWORD: DiagnosticMessage = diag!(1028, Syntax, "Unexpected keyword '{0}'");
pub const UNEXPECTED_TOKEN: DiagnosticMessage = diag!(1029, Syntax, "Unexpected token '{0}'");
pub const INVALID_REGULAR_EXPRESSION: DiagnosticMessage = diag!(1030, Syntax, "Invalid regular expression");

// ============================================================================
// Generic productions (1050-1099)
// ============================================================================

/// `{0}` token text, `{1}` operation ("start"/"end"), `{2}` production.
pub const EXPECTED_TOKEN_TO_DELIMIT: DiagnosticMessage = diag!(1050, Syntax, "Expected '{0}' to {1} a {2}");
pub const RESERVED_WORD_AS_NAME_STRICT: DiagnosticMessage = diag!(1051, Semantic, "Cannot use the reserved word '{0}' as a {1} in strict mode");
pub const RESERVED_WORD_AS_NAME: DiagnosticMessage = diag!(1052, Semantic, "Cannot use the reserved word '{0}' as a {1}");
pub const KEYWORD_AS_NAME: DiagnosticMessage = diag!(1053, Semantic, "Cannot use the keyword '{0}' as a {1}");

// ============================================================================
// Statements (1100-1199)
// ============================================================================

pub const EXPECTED_SEMICOLON_AFTER_VARIABLE_DECLARATION: DiagnosticMessage = diag!(1100, Syntax, "Expected ';' after variable declaration");
pub const EXPECTED_STATEMENT_AFTER_DO: DiagnosticMessage = diag!(1101, Syntax, "Expected a statement following 'do'");
pub const EMPTY_DO_WHILE_CONDITION: DiagnosticMessage = diag!(1102, Semantic, "Must provide an expression as a do-while loop condition");
pub const EMPTY_WHILE_CONDITION: DiagnosticMessage = diag!(1103, Semantic, "Must provide an expression as a while loop condition");
pub const EXPECTED_WHILE_BODY: DiagnosticMessage = diag!(1104, Syntax, "Expected a statement as the body of a while loop");
pub const SINGLE_ENUMERATION_VARIABLE: DiagnosticMessage = diag!(1105, Syntax, "can only declare a single variable in an enumeration");
pub const STRICT_ENUMERATION_INITIALIZER: DiagnosticMessage = diag!(1106, Semantic, "Cannot use initialiser syntax in a strict mode enumeration");
pub const PATTERN_ENUMERATION_INITIALIZER: DiagnosticMessage = diag!(1107, Syntax, "Cannot use initialiser syntax when binding to a pattern during enumeration");
pub const EXPECTED_IN_OR_OF: DiagnosticMessage = diag!(1108, Syntax, "Expected either 'in' or 'of' in enumeration syntax");
pub const FOR_OF_INITIALIZER: DiagnosticMessage = diag!(1109, Syntax, "Cannot use initialiser syntax in a for-of enumeration");
pub const EXPECTED_ENUMERATION_SUBJECT: DiagnosticMessage = diag!(1110, Syntax, "Expected expression to enumerate");
/// `{0}` is "in" or "of".
pub const EXPECTED_ENUMERATION_BODY: DiagnosticMessage = diag!(1111, Syntax, "Expected a statement as the body of a for-{0} loop");
pub const FOR_CONST_WITHOUT_INITIALIZER: DiagnosticMessage = diag!(1112, Syntax, "const variables in for loops must have initializers");
pub const EXPECTED_SEMICOLON_AFTER_FOR_CONDITION: DiagnosticMessage = diag!(1113, Syntax, "Expected a ';' after the for loop condition expression");
pub const EXPECTED_FOR_BODY: DiagnosticMessage = diag!(1114, Syntax, "Expected a statement as the body of a for loop");
pub const ENUMERATION_LHS_NOT_REFERENCE: DiagnosticMessage = diag!(1115, Syntax, "Expected a reference on the left hand side of an enumeration statement");
pub const EXPECTED_SEMICOLON_AFTER_FOR_INIT: DiagnosticMessage = diag!(1116, Syntax, "Expected a ';' after the for loop initializer");
pub const BREAK_OUTSIDE_LOOP: DiagnosticMessage = diag!(1120, Semantic, "'break' is only valid inside a switch or loop statement");
pub const CONTINUE_OUTSIDE_LOOP: DiagnosticMessage = diag!(1121, Semantic, "'continue' is only valid inside a loop statement");
pub const UNDECLARED_LABEL: DiagnosticMessage = diag!(1122, Semantic, "Cannot use the undeclared label '{0}'");
pub const CONTINUE_TO_NON_LOOP_LABEL: DiagnosticMessage = diag!(1123, Semantic, "Cannot continue to the label '{0}' as it is not targeting a loop");
pub const EXPECTED_SEMICOLON_AFTER_BREAK: DiagnosticMessage = diag!(1124, Syntax, "Expected a ';' following a targeted break statement");
pub const EXPECTED_SEMICOLON_AFTER_CONTINUE: DiagnosticMessage = diag!(1125, Syntax, "Expected a ';' following a targeted continue statement");
pub const LABEL_REDECLARED: DiagnosticMessage = diag!(1126, Syntax, "Attempted to redeclare the label '{0}'");
pub const LABELS_NEED_COLON: DiagnosticMessage = diag!(1127, Syntax, "Labels must be followed by a ':'");
pub const RETURN_OUTSIDE_FUNCTION: DiagnosticMessage = diag!(1130, Semantic, "Return statements are only valid inside functions");
pub const EXPECTED_SEMICOLON_AFTER_RETURN: DiagnosticMessage = diag!(1131, Syntax, "Expected a ';' following a return statement");
pub const EXPECTED_THROW_EXPRESSION: DiagnosticMessage = diag!(1132, Syntax, "Expected expression after 'throw'");
pub const NEWLINE_AFTER_THROW: DiagnosticMessage = diag!(1133, Semantic, "Cannot have a newline after 'throw'");
pub const EXPECTED_SEMICOLON_AFTER_THROW: DiagnosticMessage = diag!(1134, Syntax, "Expected a ';' after a throw statement");
pub const WITH_IN_STRICT_MODE: DiagnosticMessage = diag!(1135, Semantic, "'with' statements are not valid in strict mode");
pub const WITH_NEEDS_BODY: DiagnosticMessage = diag!(1136, Syntax, "A 'with' statement must have a body");
pub const EXPECTED_COLON_AFTER_CASE: DiagnosticMessage = diag!(1140, Syntax, "Expected a ':' after switch clause expression");
pub const EXPECTED_COLON_AFTER_DEFAULT: DiagnosticMessage = diag!(1141, Syntax, "Expected a ':' after switch default clause");
pub const MULTIPLE_DEFAULT_CLAUSES: DiagnosticMessage = diag!(1142, Semantic, "Multiple 'default' clauses are not allowed");
pub const EXPECTED_TRY_BLOCK: DiagnosticMessage = diag!(1145, Syntax, "Expected a block statement as body of a try statement");
pub const EXPECTED_CATCH_BLOCK: DiagnosticMessage = diag!(1146, Syntax, "Expected exception handler to be a block statement");
pub const EXPECTED_FINALLY_BLOCK: DiagnosticMessage = diag!(1147, Syntax, "Expected block statement for finally body");
pub const TRY_WITHOUT_HANDLER: DiagnosticMessage = diag!(1148, Syntax, "Try statements must have at least a catch or finally block");
pub const STRICT_CATCH_VARIABLE: DiagnosticMessage = diag!(1149, Semantic, "Cannot declare a catch variable named '{0}' in strict mode");
pub const EXPECTED_CATCH_TARGET: DiagnosticMessage = diag!(1150, Syntax, "Expected identifier name as catch target");
pub const DEBUGGER_NEEDS_SEMICOLON: DiagnosticMessage = diag!(1151, Syntax, "Debugger keyword must be followed by a ';'");
pub const EXPECTED_CLOSE_BRACE_AFTER_BLOCK: DiagnosticMessage = diag!(1152, Syntax, "Expected a closing '}' at the end of a block statement");
pub const STRICT_NESTED_FUNCTION_DECLARATION: DiagnosticMessage = diag!(1153, Semantic, "Strict mode does not allow function declarations in a lexically nested statement");
pub const EXPECTED_STATEMENT: DiagnosticMessage = diag!(1154, Syntax, "Cannot parse statement");
pub const CLASS_NOT_IN_BLOCK: DiagnosticMessage = diag!(1155, Syntax, "'class' declaration is not directly within a block statement");
pub const LEXICAL_DECLARATION_NOT_IN_BLOCK: DiagnosticMessage = diag!(1156, Syntax, "Lexical declaration cannot appear in a single-statement context");
pub const EXPECTED_IF_BODY: DiagnosticMessage = diag!(1160, Syntax, "Expected a statement as the body of an if block");
pub const EXPECTED_ELSE_BODY: DiagnosticMessage = diag!(1161, Syntax, "Expected a statement as the body of an else block");

// ============================================================================
// Declarations (1200-1299)
// ============================================================================

pub const STRICT_VARIABLE_NAME: DiagnosticMessage = diag!(1200, Semantic, "Cannot declare a variable named '{0}' in strict mode");
pub const LET_DECLARED_TWICE: DiagnosticMessage = diag!(1201, Semantic, "Cannot declare a let variable twice: '{0}'");
pub const CONST_DECLARED_TWICE: DiagnosticMessage = diag!(1202, Semantic, "Cannot declare a const variable twice: '{0}'");
pub const VAR_SHADOWS_LEXICAL: DiagnosticMessage = diag!(1203, Semantic, "Cannot declare a var variable that shadows a let/const/class variable: '{0}'");
pub const LEXICAL_DECLARED_TWICE: DiagnosticMessage = diag!(1204, Syntax, "Cannot declare a lexical variable twice: '{0}'");
pub const CONST_WITHOUT_INITIALIZER: DiagnosticMessage = diag!(1205, Syntax, "const declared variable '{0}' must have an initializer");
pub const EXPECTED_DESTRUCTURING_INITIALIZER: DiagnosticMessage = diag!(1206, Syntax, "Expected an initializer in destructuring variable declaration");
pub const LET_AS_LEXICAL_NAME: DiagnosticMessage = diag!(1207, Syntax, "Can't use 'let' as an identifier name for a LexicalDeclaration");
pub const STRICT_DESTRUCTURING_NAME: DiagnosticMessage = diag!(1208, Semantic, "Cannot destructure to a variable named '{0}' in strict mode");
pub const EXPECTED_VARIABLE_NAME: DiagnosticMessage = diag!(1209, Syntax, "Expected a variable name");
pub const STRICT_FUNCTION_DECLARATION_NAME: DiagnosticMessage = diag!(1210, Semantic, "Cannot declare a function named '{0}' in strict mode");
pub const FUNCTION_SHADOWS_LEXICAL: DiagnosticMessage = diag!(1211, Semantic, "Cannot declare a function that shadows a let/const/class variable '{0}'");
pub const CLASS_DECLARED_TWICE: DiagnosticMessage = diag!(1212, Semantic, "Cannot declare a class twice: '{0}'");

// ============================================================================
// Functions (1300-1399)
// ============================================================================

pub const STRICT_FUNCTION_NAMED_ARGUMENTS: DiagnosticMessage = diag!(1300, Semantic, "Cannot name a function 'arguments' in strict mode");
pub const STRICT_FUNCTION_NAMED_EVAL: DiagnosticMessage = diag!(1301, Semantic, "Cannot name a function 'eval' in strict mode");
pub const STRICT_VARIABLE_NAMED_ARGUMENTS: DiagnosticMessage = diag!(1302, Semantic, "Cannot declare a variable named 'arguments' in strict mode");
pub const STRICT_VARIABLE_NAMED_EVAL: DiagnosticMessage = diag!(1303, Semantic, "Cannot declare a variable named 'eval' in strict mode");
pub const INVALID_STRICT_PARAMETERS: DiagnosticMessage = diag!(1304, Semantic, "Invalid parameters or function name in strict mode");
pub const STRICT_PARAMETER_NAME: DiagnosticMessage = diag!(1305, Semantic, "Cannot declare a parameter named '{0}' in strict mode");
pub const STRICT_DUPLICATE_PARAMETER: DiagnosticMessage = diag!(1306, Semantic, "Cannot declare a parameter named '{0}' in strict mode as it has already been declared");
pub const STRICT_DESTRUCTURED_PARAMETER: DiagnosticMessage = diag!(1307, Semantic, "Cannot destructure to a parameter name '{0}' in strict mode");
pub const DUPLICATE_PARAMETER_WITH_DEFAULTS: DiagnosticMessage = diag!(1308, Semantic, "Duplicate parameter '{0}' not allowed in function with default parameter values");
pub const DUPLICATE_PARAMETER_WITH_PATTERNS: DiagnosticMessage = diag!(1309, Semantic, "Duplicate parameter '{0}' not allowed in function with destructuring parameters");
pub const DUPLICATE_PARAMETER_WITH_REST: DiagnosticMessage = diag!(1310, Semantic, "Duplicate parameter '{0}' not allowed in function with a rest parameter");
pub const DUPLICATE_PARAMETER_IN_ARROW: DiagnosticMessage = diag!(1311, Semantic, "Duplicate parameter '{0}' not allowed in an arrow function");
pub const REST_NEEDS_IDENTIFIER: DiagnosticMessage = diag!(1312, Syntax, "Rest parameter '...' should be followed by a variable identifier");
pub const REST_PARAMETER_NOT_LAST: DiagnosticMessage = diag!(1313, Syntax, "Rest parameter should be the last parameter in a function declaration");
pub const CANNOT_PARSE_PARAMETER: DiagnosticMessage = diag!(1314, Syntax, "Cannot parse parameter pattern");
/// `{0}` is the function mode description ("function", "getter", ...).
pub const CANNOT_PARSE_BODY: DiagnosticMessage = diag!(1315, Syntax, "Cannot parse the body of this {0}");
pub const EXPECTED_ARROW_PARAMETER: DiagnosticMessage = diag!(1316, Syntax, "Expected an arrow function input parameter");
pub const EXPECTED_CLOSE_PAREN_OR_COMMA_AFTER_PARAMETER: DiagnosticMessage = diag!(1317, Syntax, "Expected a ')' or a ',' after a parameter declaration");
pub const EXPECTED_OPEN_PAREN_BEFORE_PARAMETERS: DiagnosticMessage = diag!(1318, Syntax, "Expected an opening '(' before a {0}'s parameter list");
pub const GETTER_HAS_PARAMETERS: DiagnosticMessage = diag!(1319, Syntax, "getter functions must have no parameters");
pub const SETTER_PARAMETER_COUNT: DiagnosticMessage = diag!(1320, Syntax, "setter functions must have one parameter");
pub const EXPECTED_CLOSE_PAREN_AFTER_PARAMETER: DiagnosticMessage = diag!(1321, Syntax, "Expected a ')' after a parameter declaration");
pub const EXPECTED_ARROW: DiagnosticMessage = diag!(1322, Syntax, "Expected a '=>' after arrow function parameter declaration");
/// `{0}` name, `{1}` function mode description.
pub const STRICT_INVALID_FUNCTION_NAME: DiagnosticMessage = diag!(1323, Semantic, "'{0}' is not a valid {1} name in strict mode");
pub const FUNCTION_NEEDS_NAME: DiagnosticMessage = diag!(1324, Semantic, "Function statements must have a name");
pub const EXPECTED_OPEN_BRACE_BEFORE_BODY: DiagnosticMessage = diag!(1325, Syntax, "Expected an opening '{' at the start of a {0} body");
pub const SUPER_CALL_OUTSIDE_CONSTRUCTOR: DiagnosticMessage = diag!(1326, Semantic, "Cannot call super() outside of a class constructor");
pub const SUPER_CALL_IN_BASE_CONSTRUCTOR: DiagnosticMessage = diag!(1327, Semantic, "Cannot call super() in a base class constructor");
pub const SUPER_OUTSIDE_METHOD: DiagnosticMessage = diag!(1328, Semantic, "super can only be used in a method of a derived class");
pub const STRICT_FUNCTION_NAME: DiagnosticMessage = diag!(1329, Semantic, "'{0}' is not a valid function name in strict mode");
pub const EXPECTED_END_OF_ARROW_FUNCTION: DiagnosticMessage = diag!(1330, Syntax, "Expected the closing ';' ',' ']' ')' '}', line terminator or EOF after arrow function");
pub const EXPECTED_CLOSE_BRACE_AFTER_BODY: DiagnosticMessage = diag!(1331, Syntax, "Expected a closing '}' after a {0} body");
pub const CANNOT_PARSE_PARAMETERS: DiagnosticMessage = diag!(1332, Syntax, "Cannot parse parameters for this {0}");
pub const STRICT_PARAMETER_SHADOWS_FUNCTION: DiagnosticMessage = diag!(1333, Semantic, "Cannot declare a parameter named '{0}' as it shadows the name of a strict mode function");
pub const YIELD_OUTSIDE_GENERATOR: DiagnosticMessage = diag!(1334, Syntax, "Cannot use yield expression out of generator");
pub const YIELD_IN_PARAMETERS: DiagnosticMessage = diag!(1335, Syntax, "Cannot use yield expression within parameters");
pub const LINE_TERMINATOR_BEFORE_ARROW: DiagnosticMessage = diag!(1336, Syntax, "Unexpected line terminator before '=>'");

// ============================================================================
// Expressions (1400-1499)
// ============================================================================

pub const ASSIGNMENT_TO_NON_REFERENCE: DiagnosticMessage = diag!(1400, Semantic, "Left hand side of operator '{0}' must be a reference");
pub const STRICT_MODIFY_EVAL: DiagnosticMessage = diag!(1401, Semantic, "Cannot modify 'eval' in strict mode");
pub const STRICT_MODIFY_ARGUMENTS: DiagnosticMessage = diag!(1402, Semantic, "Cannot modify 'arguments' in strict mode");
pub const STRICT_MODIFY_NAME: DiagnosticMessage = diag!(1403, Semantic, "Cannot modify '{0}' in strict mode");
pub const STRICT_NAME_CANNOT_BE_MODIFIED: DiagnosticMessage = diag!(1404, Semantic, "'{0}' cannot be modified in strict mode");
pub const EXPECTED_COLON_IN_TERNARY: DiagnosticMessage = diag!(1405, Syntax, "Expected ':' in ternary operator");
pub const EXPECTED_ASSIGNMENT_PATTERN_EQUALS: DiagnosticMessage = diag!(1406, Syntax, "Expected '=' following assignment pattern");
pub const CANNOT_PARSE_ASSIGNMENT_PATTERN: DiagnosticMessage = diag!(1430, Syntax, "Cannot parse assignment pattern");
/// `{0}` is the operator description ("prefix-increment", "delete", ...).
pub const OPERATOR_REQUIRES_REFERENCE: DiagnosticMessage = diag!(1407, Semantic, "The {0} operator requires a reference expression");
pub const STRICT_DELETE_UNQUALIFIED: DiagnosticMessage = diag!(1408, Semantic, "Cannot delete unqualified property '{0}' in strict mode");
pub const EXPECTED_EXPRESSION: DiagnosticMessage = diag!(1409, Syntax, "Cannot parse expression");
pub const EXPECTED_PROPERTY_NAME_AFTER_DOT: DiagnosticMessage = diag!(1410, Syntax, "Expected a property name after '.'");
pub const NEW_WITH_SUPER: DiagnosticMessage = diag!(1411, Semantic, "Cannot use new with super");
pub const NEW_TARGET_OUTSIDE_FUNCTION: DiagnosticMessage = diag!(1412, Semantic, "new.target is only valid inside functions");
pub const NEW_DOT_NOT_TARGET: DiagnosticMessage = diag!(1413, Syntax, "\"new.\" can only followed with target");
pub const SUPER_OUTSIDE_FUNCTION: DiagnosticMessage = diag!(1414, Semantic, "super is only valid inside functions");
pub const SUPER_TAGGED_TEMPLATE: DiagnosticMessage = diag!(1415, Semantic, "Cannot use super as tag for tagged templates");
pub const SUPER_REFERENCE: DiagnosticMessage = diag!(1416, Semantic, "Cannot reference super");
pub const SPREAD_AFTER_ARGUMENT: DiagnosticMessage = diag!(1417, Semantic, "The '...' operator should come before the target expression");
pub const SPREAD_AFTER_ELEMENT: DiagnosticMessage = diag!(1418, Semantic, "The '...' operator should come before a target expression");
pub const EXPECTED_ARRAY_ELEMENT_END: DiagnosticMessage = diag!(1419, Syntax, "Expected either a closing ']' or a ',' following an array element");
pub const EXPECTED_PROPERTY_NAME: DiagnosticMessage = diag!(1420, Syntax, "Expected a property name");
pub const EXPECTED_COLON_AFTER_PROPERTY_NAME: DiagnosticMessage = diag!(1421, Syntax, "Expected ':' after property name");
pub const EXPECTED_COLON_AFTER_NAMED_PROPERTY: DiagnosticMessage = diag!(1422, Syntax, "Expected a ':' following the property name '{0}'");
pub const EXPECTED_PARENTHESIS_FOR_GENERATOR: DiagnosticMessage = diag!(1423, Syntax, "Expected a parenthesis for argument list");
pub const DUPLICATE_PROTO: DiagnosticMessage = diag!(1424, Semantic, "Attempted to redefine __proto__ property");
pub const EXPECTED_GETTER_PARAMETERS: DiagnosticMessage = diag!(1425, Syntax, "Expected a parameter list for getter definition");
pub const EXPECTED_SETTER_PARAMETERS: DiagnosticMessage = diag!(1426, Syntax, "Expected a parameter list for setter definition");
pub const EMPTY_TEMPLATE_EXPRESSION: DiagnosticMessage = diag!(1427, Syntax, "Template literal expression cannot be empty");
pub const EXPECTED_TEMPLATE_CLOSE_BRACE: DiagnosticMessage = diag!(1428, Syntax, "Expected a closing '}' following an expression in template literal");
pub const SHORTHAND_INITIALIZER_OUTSIDE_PATTERN: DiagnosticMessage = diag!(1429, Syntax, "Unexpected '=' after shorthand property; only valid in a destructuring pattern");

// ============================================================================
// Destructuring patterns (1500-1599)
// ============================================================================

pub const INVALID_DESTRUCTURING_TARGET: DiagnosticMessage = diag!(1500, Semantic, "Invalid destructuring assignment target");
pub const REST_ELEMENT_NEEDS_IDENTIFIER: DiagnosticMessage = diag!(1501, Syntax, "Expected identifier for a rest element destructuring pattern");
pub const EXPECTED_CLOSE_BRACKET_AFTER_REST: DiagnosticMessage = diag!(1502, Syntax, "Expected a closing ']' following a rest element destructuring pattern");
pub const EXPECTED_CLOSE_BRACKET_OR_COMMA_IN_PATTERN: DiagnosticMessage = diag!(1503, Syntax, "Expected either a closing ']' or a ',' following an element destructuring pattern");
pub const EXPECTED_CLOSE_BRACKET_AFTER_COMPUTED_NAME: DiagnosticMessage = diag!(1504, Syntax, "Expected ']' to end end a computed property name");
pub const SHORTHAND_RESERVED_NAME: DiagnosticMessage = diag!(1505, Semantic, "Cannot use abbreviated destructuring syntax for reserved name '{0}'");
pub const SHORTHAND_STRICT_RESERVED_NAME: DiagnosticMessage = diag!(1506, Semantic, "Cannot use abbreviated destructuring syntax for reserved name '{0}' in strict mode");
pub const SHORTHAND_KEYWORD: DiagnosticMessage = diag!(1507, Semantic, "Cannot use abbreviated destructuring syntax for keyword '{0}'");
pub const EXPECTED_COLON_IN_PROPERTY_PATTERN: DiagnosticMessage = diag!(1508, Syntax, "Expected a ':' prior to a named destructuring property");
pub const EXPECTED_CLOSE_BRACE_IN_PROPERTY_PATTERN: DiagnosticMessage = diag!(1509, Syntax, "Expected either a closing '}' or an ',' after a property destructuring pattern");
pub const EXPECTED_PATTERN: DiagnosticMessage = diag!(1510, Syntax, "Expected a parameter pattern or a ')' in parameter list");
pub const CANNOT_PARSE_PATTERN: DiagnosticMessage = diag!(1511, Syntax, "Cannot parse this destructuring pattern");

// ============================================================================
// Classes (1600-1699)
// ============================================================================

pub const INVALID_CLASS_NAME: DiagnosticMessage = diag!(1600, Syntax, "'{0}' is not a valid class name");
pub const CLASS_NEEDS_NAME: DiagnosticMessage = diag!(1601, Semantic, "Class statements must have a name");
pub const EXPECTED_CLASS_BODY: DiagnosticMessage = diag!(1602, Syntax, "Expected opening '{' at the start of a class body");
pub const EXPECTED_CLASS_BODY_END: DiagnosticMessage = diag!(1603, Syntax, "Expected a closing '}' after a class body");
pub const GENERATOR_NAMED_PROTOTYPE: DiagnosticMessage = diag!(1604, Semantic, "Cannot declare a generator named 'prototype'");
pub const GENERATOR_NAMED_CONSTRUCTOR: DiagnosticMessage = diag!(1605, Semantic, "Cannot declare a generator named 'constructor'");
pub const MULTIPLE_CONSTRUCTORS: DiagnosticMessage = diag!(1606, Semantic, "Cannot declare multiple constructors in a single class");
pub const STATIC_PROTOTYPE: DiagnosticMessage = diag!(1607, Semantic, "Cannot declare a static method named 'prototype'");
pub const ACCESSOR_CONSTRUCTOR: DiagnosticMessage = diag!(1608, Semantic, "Cannot declare a getter or setter named 'constructor'");

// ============================================================================
// Modules (1700-1799)
// ============================================================================

pub const EXPORTED_BINDING_NOT_DECLARED: DiagnosticMessage = diag!(1700, Semantic, "Exported binding '{0}' needs to refer to a top-level declared variable");
pub const DUPLICATE_EXPORT: DiagnosticMessage = diag!(1701, Semantic, "Cannot export a duplicate name '{0}'");
pub const MODULE_NAME_NOT_STRING: DiagnosticMessage = diag!(1702, Syntax, "Imported modules names must be string literals");
pub const EXPECTED_AS_BEFORE_BINDING: DiagnosticMessage = diag!(1703, Syntax, "Expected 'as' before imported binding name");
pub const EXPECTED_IMPORT_BINDING: DiagnosticMessage = diag!(1704, Syntax, "Expected a variable name for the import declaration");
pub const KEYWORD_AS_IMPORT_BINDING: DiagnosticMessage = diag!(1705, Semantic, "Cannot use keyword as imported binding name");
pub const STRICT_IMPORT_BINDING: DiagnosticMessage = diag!(1706, Semantic, "Cannot declare an imported binding named {0} in strict mode");
pub const IMPORT_BINDING_TWICE: DiagnosticMessage = diag!(1707, Semantic, "Cannot declare an imported binding name twice: '{0}'");
pub const EXPECTED_SEMICOLON_AFTER_IMPORT: DiagnosticMessage = diag!(1708, Syntax, "Expected a ';' following a targeted import declaration");
pub const EXPECTED_IMPORTED_NAME: DiagnosticMessage = diag!(1709, Syntax, "Expected an imported name for the import declaration");
pub const EXPECTED_IMPORT_CLAUSE: DiagnosticMessage = diag!(1710, Syntax, "Expected namespace import or import list");
pub const EXPECTED_FROM_BEFORE_IMPORT: DiagnosticMessage = diag!(1711, Syntax, "Expected 'from' before imported module name");
pub const EXPECTED_EXPORTED_NAME: DiagnosticMessage = diag!(1712, Syntax, "Expected an exported name for the export declaration");
pub const EXPECTED_FROM_BEFORE_EXPORT: DiagnosticMessage = diag!(1713, Syntax, "Expected 'from' before exported module name");
pub const EXPECTED_SEMICOLON_AFTER_EXPORT: DiagnosticMessage = diag!(1714, Syntax, "Expected a ';' following a targeted export declaration");
pub const DUPLICATE_DEFAULT_EXPORT: DiagnosticMessage = diag!(1715, Semantic, "Only one 'default' export is allowed");
pub const EXPECTED_EXPORT_BINDING: DiagnosticMessage = diag!(1716, Syntax, "Expected a variable name for the export declaration");
pub const KEYWORD_AS_EXPORT_BINDING: DiagnosticMessage = diag!(1717, Semantic, "Cannot use keyword as exported variable name");
pub const EXPECTED_EXPORT_DECLARATION: DiagnosticMessage = diag!(1718, Syntax, "Expected either a declaration or a variable statement");
pub const MODULE_ITEM_OUTSIDE_MODULE: DiagnosticMessage = diag!(1719, Syntax, "Import and export declarations are only valid in a module");
pub const MODULE_ITEM_NOT_TOP_LEVEL: DiagnosticMessage = diag!(1720, Syntax, "Import and export declarations are only valid at the top level of a module");
