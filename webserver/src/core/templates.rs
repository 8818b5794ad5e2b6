//! Template store
//!
//! Static mapping from a detected intent to the bundle of files produced for it.
//! Pure data; the classifier decides which entry applies.

use shared::{AppPlan, FileBundle, FileEntry, Language};

/// Intents recognised by keyword, in the order they are checked
pub const INTENTS: [Intent; 2] = [Intent::Calculator, Intent::Todo];

/// A recognised application intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Calculator,
    Todo,
}

impl Intent {
    /// Lowercase keyword matched against the prompt
    pub fn keyword(&self) -> &'static str {
        match self {
            Intent::Calculator => "calculator",
            Intent::Todo => "todo",
        }
    }

    pub fn template(&self) -> &'static Template {
        match self {
            Intent::Calculator => &CALCULATOR,
            Intent::Todo => &TODO,
        }
    }
}

/// A canned application: plan text plus its files in creation order
#[derive(Debug)]
pub struct Template {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub files: &'static [(&'static str, Language, &'static str)],
}

impl Template {
    /// Materializable bundle for this template
    pub fn bundle(&self) -> FileBundle {
        let mut bundle = FileBundle::new();
        for (name, language, content) in self.files {
            bundle.insert(*name, FileEntry::new(*content, *language));
        }
        bundle
    }

    pub fn plan(&self) -> AppPlan {
        AppPlan {
            title: self.title.to_string(),
            description: self.description.to_string(),
            features: self.features.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Plan offered when a plan request matches no intent
pub fn generic_plan(prompt: &str) -> AppPlan {
    AppPlan {
        title: "Custom Web Application".to_string(),
        description: format!("A browser-based application for: {}", prompt.trim()),
        features: vec![
            "Responsive single-page layout".to_string(),
            "Interactive controls with JavaScript".to_string(),
            "Clean, modern styling".to_string(),
            "Local state persisted in the browser".to_string(),
        ],
    }
}

static CALCULATOR: Template = Template {
    title: "Calculator App",
    description: "A browser calculator supporting addition, subtraction, multiplication and division with decimal input.",
    features: &[
        "Basic arithmetic: + − × ÷",
        "Decimal input",
        "Clear and backspace controls",
        "Keyboard support",
        "Safe expression evaluation",
    ],
    files: &[
        ("index.html", Language::Html, CALCULATOR_HTML),
        ("style.css", Language::Css, CALCULATOR_CSS),
        ("script.js", Language::Javascript, CALCULATOR_JS),
    ],
};

static TODO: Template = Template {
    title: "Todo App",
    description: "A task list with add, complete, delete and filter operations, persisted in local storage.",
    features: &[
        "Add tasks",
        "Mark tasks complete",
        "Delete tasks",
        "Filter by all / active / completed",
        "Persistence with localStorage",
    ],
    files: &[
        ("index.html", Language::Html, TODO_HTML),
        ("style.css", Language::Css, TODO_CSS),
        ("script.js", Language::Javascript, TODO_JS),
    ],
};

const CALCULATOR_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Calculator</title>
    <link rel="stylesheet" href="style.css">
</head>
<body>
    <div class="calculator">
        <div class="display" id="display">0</div>
        <div class="keys">
            <button class="key fn" data-action="clear">C</button>
            <button class="key fn" data-action="back">⌫</button>
            <button class="key op" data-value="/">÷</button>
            <button class="key op" data-value="*">×</button>
            <button class="key" data-value="7">7</button>
            <button class="key" data-value="8">8</button>
            <button class="key" data-value="9">9</button>
            <button class="key op" data-value="-">−</button>
            <button class="key" data-value="4">4</button>
            <button class="key" data-value="5">5</button>
            <button class="key" data-value="6">6</button>
            <button class="key op" data-value="+">+</button>
            <button class="key" data-value="1">1</button>
            <button class="key" data-value="2">2</button>
            <button class="key" data-value="3">3</button>
            <button class="key eq" data-action="equals">=</button>
            <button class="key zero" data-value="0">0</button>
            <button class="key" data-value=".">.</button>
        </div>
    </div>
    <script src="script.js"></script>
</body>
</html>
"#;

const CALCULATOR_CSS: &str = r#"* {
    box-sizing: border-box;
    margin: 0;
    padding: 0;
}

body {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    background: #1f2430;
    font-family: system-ui, sans-serif;
}

.calculator {
    width: 320px;
    padding: 20px;
    border-radius: 16px;
    background: #2b3140;
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.4);
}

.display {
    height: 72px;
    margin-bottom: 16px;
    padding: 0 12px;
    border-radius: 8px;
    background: #161a22;
    color: #e6e9ef;
    font-size: 2rem;
    text-align: right;
    line-height: 72px;
    overflow: hidden;
}

.keys {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 10px;
}

.key {
    height: 60px;
    border: none;
    border-radius: 8px;
    background: #3a4152;
    color: #e6e9ef;
    font-size: 1.25rem;
    cursor: pointer;
}

.key:hover {
    filter: brightness(1.15);
}

.key.op {
    background: #4f6df5;
}

.key.fn {
    background: #5b6275;
}

.key.eq {
    grid-row: span 2;
    height: auto;
    background: #f5a524;
}

.key.zero {
    grid-column: span 2;
}
"#;

const CALCULATOR_JS: &str = r#"const display = document.getElementById('display');
let expression = '';

function render() {
    display.textContent = expression === '' ? '0' : expression;
}

function sanitizeExpression(input) {
    // Only digits, decimal points and the four operators survive
    return input.replace(/[^0-9.+\-*/]/g, '');
}

function tokenize(input) {
    const tokens = [];
    let number = '';
    for (let i = 0; i < input.length; i++) {
        const ch = input[i];
        const unaryMinus = ch === '-' && number === '' &&
            (tokens.length === 0 || typeof tokens[tokens.length - 1] === 'string');
        if ((ch >= '0' && ch <= '9') || ch === '.' || unaryMinus) {
            number += ch;
            continue;
        }
        if (number !== '') {
            tokens.push(parseFloat(number));
            number = '';
        }
        tokens.push(ch);
    }
    if (number !== '') {
        tokens.push(parseFloat(number));
    }
    return tokens;
}

// Shunting-yard evaluation over + - * /, no dynamic code execution
function evalSanitized(input) {
    const precedence = { '+': 1, '-': 1, '*': 2, '/': 2 };
    const output = [];
    const operators = [];

    for (const token of tokenize(input)) {
        if (typeof token === 'number') {
            if (Number.isNaN(token)) throw new Error('Invalid number');
            output.push(token);
            continue;
        }
        while (operators.length && precedence[operators[operators.length - 1]] >= precedence[token]) {
            output.push(operators.pop());
        }
        operators.push(token);
    }
    while (operators.length) {
        output.push(operators.pop());
    }

    const stack = [];
    for (const token of output) {
        if (typeof token === 'number') {
            stack.push(token);
            continue;
        }
        const right = stack.pop();
        const left = stack.pop();
        if (left === undefined || right === undefined) throw new Error('Incomplete expression');
        switch (token) {
            case '+': stack.push(left + right); break;
            case '-': stack.push(left - right); break;
            case '*': stack.push(left * right); break;
            case '/':
                if (right === 0) throw new Error('Division by zero');
                stack.push(left / right);
                break;
        }
    }
    if (stack.length !== 1) throw new Error('Invalid expression');
    return stack[0];
}

function calculate() {
    const sanitized = sanitizeExpression(expression);
    try {
        const result = evalSanitized(sanitized);
        expression = String(Math.round(result * 1e10) / 1e10);
    } catch (err) {
        expression = '';
        display.textContent = 'Error';
        return;
    }
    render();
}

function press(value) {
    const last = expression.slice(-1);
    if ('+-*/'.includes(value) && '+*/'.includes(last)) {
        expression = expression.slice(0, -1);
    }
    expression += value;
    render();
}

document.querySelectorAll('.key').forEach((key) => {
    key.addEventListener('click', () => {
        const action = key.dataset.action;
        if (action === 'clear') {
            expression = '';
            render();
        } else if (action === 'back') {
            expression = expression.slice(0, -1);
            render();
        } else if (action === 'equals') {
            calculate();
        } else {
            press(key.dataset.value);
        }
    });
});

document.addEventListener('keydown', (event) => {
    if (/^[0-9.+\-*/]$/.test(event.key)) {
        press(event.key);
    } else if (event.key === 'Enter' || event.key === '=') {
        calculate();
    } else if (event.key === 'Backspace') {
        expression = expression.slice(0, -1);
        render();
    } else if (event.key === 'Escape') {
        expression = '';
        render();
    }
});

render();
"#;

const TODO_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Todo App</title>
    <link rel="stylesheet" href="style.css">
</head>
<body>
    <main class="app">
        <h1>My Tasks</h1>
        <form id="todo-form" class="todo-form">
            <input id="todo-input" type="text" placeholder="What needs to be done?" autocomplete="off">
            <button type="submit">Add</button>
        </form>
        <div class="filters">
            <button class="filter active" data-filter="all">All</button>
            <button class="filter" data-filter="active">Active</button>
            <button class="filter" data-filter="completed">Completed</button>
        </div>
        <ul id="todo-list" class="todo-list"></ul>
        <p id="todo-count" class="todo-count"></p>
    </main>
    <script src="script.js"></script>
</body>
</html>
"#;

const TODO_CSS: &str = r#"* {
    box-sizing: border-box;
}

body {
    margin: 0;
    min-height: 100vh;
    background: linear-gradient(135deg, #667eea, #764ba2);
    font-family: system-ui, sans-serif;
    display: flex;
    justify-content: center;
    align-items: flex-start;
    padding-top: 60px;
}

.app {
    width: 100%;
    max-width: 480px;
    padding: 24px;
    border-radius: 12px;
    background: #ffffff;
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
}

h1 {
    margin-top: 0;
    color: #333333;
}

.todo-form {
    display: flex;
    gap: 8px;
}

.todo-form input {
    flex: 1;
    padding: 10px;
    border: 1px solid #dddddd;
    border-radius: 6px;
    font-size: 1rem;
}

.todo-form button,
.filter {
    padding: 10px 14px;
    border: none;
    border-radius: 6px;
    background: #667eea;
    color: #ffffff;
    cursor: pointer;
}

.filters {
    display: flex;
    gap: 6px;
    margin: 16px 0;
}

.filter {
    background: #eeeeee;
    color: #333333;
}

.filter.active {
    background: #764ba2;
    color: #ffffff;
}

.todo-list {
    list-style: none;
    padding: 0;
    margin: 0;
}

.todo-item {
    display: flex;
    align-items: center;
    gap: 10px;
    padding: 10px 0;
    border-bottom: 1px solid #f0f0f0;
}

.todo-item.completed span {
    text-decoration: line-through;
    color: #999999;
}

.todo-item span {
    flex: 1;
}

.todo-item .delete {
    border: none;
    background: transparent;
    color: #e74c3c;
    font-size: 1.1rem;
    cursor: pointer;
}

.todo-count {
    color: #777777;
    font-size: 0.9rem;
}
"#;

const TODO_JS: &str = r#"const STORAGE_KEY = 'todos';

const form = document.getElementById('todo-form');
const input = document.getElementById('todo-input');
const list = document.getElementById('todo-list');
const count = document.getElementById('todo-count');

let todos = JSON.parse(localStorage.getItem(STORAGE_KEY) || '[]');
let currentFilter = 'all';

function save() {
    localStorage.setItem(STORAGE_KEY, JSON.stringify(todos));
}

function visibleTodos() {
    if (currentFilter === 'active') return todos.filter((t) => !t.completed);
    if (currentFilter === 'completed') return todos.filter((t) => t.completed);
    return todos;
}

function render() {
    list.innerHTML = '';
    for (const todo of visibleTodos()) {
        const item = document.createElement('li');
        item.className = 'todo-item' + (todo.completed ? ' completed' : '');

        const checkbox = document.createElement('input');
        checkbox.type = 'checkbox';
        checkbox.checked = todo.completed;
        checkbox.addEventListener('change', () => toggle(todo.id));

        const text = document.createElement('span');
        text.textContent = todo.text;

        const remove = document.createElement('button');
        remove.className = 'delete';
        remove.textContent = '✕';
        remove.addEventListener('click', () => removeTodo(todo.id));

        item.append(checkbox, text, remove);
        list.appendChild(item);
    }
    const remaining = todos.filter((t) => !t.completed).length;
    count.textContent = `${remaining} item${remaining === 1 ? '' : 's'} left`;
}

function addTodo(text) {
    todos.push({ id: Date.now(), text, completed: false });
    save();
    render();
}

function toggle(id) {
    todos = todos.map((t) => (t.id === id ? { ...t, completed: !t.completed } : t));
    save();
    render();
}

function removeTodo(id) {
    todos = todos.filter((t) => t.id !== id);
    save();
    render();
}

form.addEventListener('submit', (event) => {
    event.preventDefault();
    const text = input.value.trim();
    if (!text) return;
    addTodo(text);
    input.value = '';
});

document.querySelectorAll('.filter').forEach((button) => {
    button.addEventListener('click', () => {
        document.querySelectorAll('.filter').forEach((b) => b.classList.remove('active'));
        button.classList.add('active');
        currentFilter = button.dataset.filter;
        render();
    });
});

render();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_order() {
        assert_eq!(INTENTS[0].keyword(), "calculator");
        assert_eq!(INTENTS[1].keyword(), "todo");
    }

    #[test]
    fn test_templates_produce_fixed_file_sets() {
        for intent in INTENTS {
            let bundle = intent.template().bundle();
            assert_eq!(bundle.names(), vec!["index.html", "style.css", "script.js"]);
            assert!(bundle.iter().all(|(_, entry)| !entry.content.trim().is_empty()));
        }
    }

    #[test]
    fn test_calculator_never_calls_dynamic_eval() {
        let bundle = Intent::Calculator.template().bundle();
        let script = &bundle.get("script.js").unwrap().content;

        assert!(script.contains("evalSanitized(sanitized)"));
        assert!(!script.contains("eval("));
        assert!(!script.contains("new Function"));
    }

    #[test]
    fn test_generic_plan_mentions_prompt() {
        let plan = generic_plan("  a weather dashboard ");
        assert_eq!(plan.title, "Custom Web Application");
        assert!(plan.description.ends_with("a weather dashboard"));
        assert!(!plan.features.is_empty());
    }
}
