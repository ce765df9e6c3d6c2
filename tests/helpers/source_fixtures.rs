//! Common WebIDL fixtures for tests.

pub const CONSTRUCTOR_SCENARIO: &str = "interface Foo { Foo(); long bar(); };";

pub const CANVAS: &str = r#"
[Exposed=Window]
interface Canvas : Element {
    Canvas(unsigned long width, unsigned long height);
    Context GetContext(DOMString kind);
    void Draw(Canvas source, optional Context? ctx);
    attribute Canvas parent;
};

interface Context {
    readonly attribute Canvas canvas;
};

enum ContextKind { "2d", "webgl" };

dictionary ContextOptions {
    boolean alpha = true;
};
"#;

pub const PARTIALS: &str = r#"
interface Point {
    attribute double x;
    attribute double y;
};

partial interface Point {
    attribute double z;
};

enum Axis { "x", "y" };
enum Axis { "z" };
"#;

pub const MIXINS: &str = r#"
interface Window {};
interface GlobalEventHandlers {
    attribute EventHandler onload;
};
Window implements GlobalEventHandlers;
"#;
