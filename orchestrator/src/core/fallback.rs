//! Offline response generator
//!
//! Used when the server cannot be reached. Picks one of a few canned
//! answers by keyword and returns it as markdown with fenced code blocks,
//! so the normal typing path can extract and replay the files.

const CALCULATOR: &str = r#"I'm working offline, so here is a compact calculator to get you started.

```html:index.html
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Calculator</title>
    <link rel="stylesheet" href="style.css">
</head>
<body>
    <input id="display" readonly>
    <div id="keys"></div>
    <script src="script.js"></script>
</body>
</html>
```

```css:style.css
body { font-family: sans-serif; display: grid; place-items: center; }
#display { width: 12rem; font-size: 1.5rem; text-align: right; }
#keys { display: grid; grid-template-columns: repeat(4, 3rem); gap: 0.25rem; }
```

```js:script.js
const display = document.getElementById('display');
const keys = '789/456*123-0.=+C'.split('');
let left = null;
let op = null;

keys.forEach((key) => {
    const button = document.createElement('button');
    button.textContent = key;
    button.addEventListener('click', () => press(key));
    document.getElementById('keys').appendChild(button);
});

function press(key) {
    if (key === 'C') { display.value = ''; left = null; op = null; return; }
    if ('+-*/'.includes(key)) { left = parseFloat(display.value); op = key; display.value = ''; return; }
    if (key === '=') { display.value = apply(left, parseFloat(display.value), op); op = null; return; }
    display.value += key;
}

function apply(a, b, operator) {
    switch (operator) {
        case '+': return a + b;
        case '-': return a - b;
        case '*': return a * b;
        case '/': return b === 0 ? 'Error' : a / b;
        default: return b;
    }
}
```
"#;

const TODO: &str = r#"I'm working offline, so here is a minimal todo list.

```html:index.html
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Todo</title>
    <link rel="stylesheet" href="style.css">
</head>
<body>
    <form id="add"><input id="task" placeholder="New task"><button>Add</button></form>
    <ul id="list"></ul>
    <script src="script.js"></script>
</body>
</html>
```

```css:style.css
body { font-family: sans-serif; max-width: 30rem; margin: 2rem auto; }
li.done { text-decoration: line-through; color: #888; }
```

```js:script.js
const list = document.getElementById('list');
document.getElementById('add').addEventListener('submit', (event) => {
    event.preventDefault();
    const input = document.getElementById('task');
    if (!input.value.trim()) return;
    const item = document.createElement('li');
    item.textContent = input.value.trim();
    item.addEventListener('click', () => item.classList.toggle('done'));
    list.appendChild(item);
    input.value = '';
});
```
"#;

const GENERIC: &str = r#"I'm working offline, so here is a starter page you can build on.

```html
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>My App</title>
    <link rel="stylesheet" href="styles.css">
</head>
<body>
    <main>
        <h1>My App</h1>
        <p id="status">Ready.</p>
    </main>
    <script src="script.js"></script>
</body>
</html>
```

```css
body { font-family: sans-serif; margin: 0; }
main { max-width: 40rem; margin: 3rem auto; }
```

```js
document.getElementById('status').textContent = 'Loaded at ' + new Date().toLocaleTimeString();
```
"#;

/// Canned markdown answer for `prompt`
pub fn offline_response(prompt: &str) -> &'static str {
    let prompt = prompt.to_lowercase();
    if prompt.contains("calculator") {
        CALCULATOR
    } else if prompt.contains("todo") {
        TODO
    } else {
        GENERIC
    }
}
