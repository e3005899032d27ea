use crate::models::{CodeSample, CourseModule, Lesson, LessonExercise};

const VIDEO: &str = "https://www.youtube.com/embed/PkZNo7MFNFg";

pub(super) static MODULES: &[CourseModule] = &[
    CourseModule {
        title: "Introduction to JavaScript",
        description: "Learn the fundamentals of JavaScript programming language",
        topics: &[
            "What is JavaScript?",
            "Setting up your development environment",
            "Basic syntax and data types",
            "Variables and constants",
        ],
        video_url: VIDEO,
        duration: "45 minutes",
        path: "/courses/javascript/jsbasics/variables-and-datatypes",
    },
    CourseModule {
        title: "Objects and Arrays",
        description: "Master JavaScript objects and arrays",
        topics: &["Working with Arrays", "Array Methods", "Object Creation", "Object Properties"],
        video_url: VIDEO,
        duration: "50 minutes",
        path: "/courses/javascript/jsbasics/objects-and-arrays",
    },
    CourseModule {
        title: "Functions & Scope",
        description: "Understanding functions and variable scope in JavaScript",
        topics: &[
            "Function declarations",
            "Arrow functions",
            "Function parameters",
            "Variable scope and closures",
        ],
        video_url: VIDEO,
        duration: "55 minutes",
        path: "/courses/javascript/jsbasics/functions-and-scope",
    },
    CourseModule {
        title: "Control Flow & Loops",
        description: "Master JavaScript control structures and loops",
        topics: &[
            "Conditional statements (if/else)",
            "Switch statements",
            "For loops and while loops",
            "Break and continue",
        ],
        video_url: VIDEO,
        duration: "45 minutes",
        path: "/courses/javascript/jsbasics/control-flow-and-loops",
    },
    CourseModule {
        title: "DOM Manipulation",
        description: "Learn to interact with the Document Object Model",
        topics: &[
            "Selecting DOM elements",
            "Modifying element content",
            "Event handling",
            "Creating and removing elements",
        ],
        video_url: VIDEO,
        duration: "60 minutes",
        path: "/courses/javascript/jsbasics/dom-manipulation",
    },
    CourseModule {
        title: "Asynchronous JavaScript",
        description: "Understanding async programming in JavaScript",
        topics: &["Callbacks and Promises", "Async/Await syntax", "Fetch API", "Error handling"],
        video_url: VIDEO,
        duration: "65 minutes",
        path: "/courses/javascript/jsbasics/async-javascript",
    },
    CourseModule {
        title: "Error Handling & Debugging",
        description: "Learn to handle errors and debug JavaScript code",
        topics: &[
            "Try-catch statements",
            "Error types",
            "Debugging techniques",
            "Browser developer tools",
        ],
        video_url: VIDEO,
        duration: "40 minutes",
        path: "/courses/javascript/jsbasics/error-handling",
    },
];

pub(super) static LESSONS: &[Lesson] = &[
    Lesson {
        slug: "variables-and-datatypes",
        title: "Variables and Data Types",
        intro: "Variables are containers for storing data values. JavaScript provides several ways to declare variables and supports various data types to handle different kinds of information.",
        samples: &[
            CodeSample {
                title: "Variable Declarations",
                code: r#"// Variable declarations
let name = "John";           // String
const age = 25;             // Number
var isStudent = true;       // Boolean
let scores = [85, 92, 78];  // Array
let person = {              // Object
  name: "John",
  age: 25
};"#,
            },
            CodeSample {
                title: "Data Types",
                code: r#"// JavaScript Data Types
let string = "Hello";       // String
let number = 42;           // Number
let boolean = true;        // Boolean
let array = [1, 2, 3];     // Array
let object = {};          // Object
let nullValue = null;     // Null
let undefinedValue;       // Undefined"#,
            },
            CodeSample {
                title: "Modern JavaScript Features",
                code: r#"// Modern JavaScript Features
const PI = 3.14;           // Constants
let [x, y] = [1, 2];      // Array Destructuring
let { name, age } = person; // Object Destructuring
let sum = (...nums) => nums.reduce((a, b) => a + b); // Rest Parameters"#,
            },
        ],
        exercises: &[
            LessonExercise {
                title: "Variable Declaration",
                prompt: "Create a variable named 'greeting' and assign it a string value.",
                template: "// Write your code here\n",
                solution: "let greeting = 'Hello, World!';",
                hint: "Use 'let' or 'const' to declare variables in modern JavaScript.",
            },
            LessonExercise {
                title: "Working with Numbers",
                prompt: "Create two number variables and add them together.",
                template: "// Declare two numbers and add them\n",
                solution: "let num1 = 10;\nlet num2 = 20;\nlet sum = num1 + num2;",
                hint: "Numbers in JavaScript can be integers or decimals.",
            },
        ],
    },
    Lesson {
        slug: "objects-and-arrays",
        title: "Objects and Arrays",
        intro: "Arrays hold ordered lists of values and objects group related values under named keys. Together they are the building blocks of almost every JavaScript program.",
        samples: &[
            CodeSample {
                title: "Working with Arrays",
                code: r#"// Array Creation and Methods
let fruits = ['apple', 'banana', 'orange'];
let numbers = [1, 2, 3, 4, 5];

// Array Methods
fruits.push('grape');           // Add to end
fruits.pop();                   // Remove from end
fruits.unshift('mango');        // Add to start
fruits.shift();                 // Remove from start
fruits.slice(1, 3);            // Get subset
fruits.splice(1, 1, 'kiwi');   // Replace elements"#,
            },
            CodeSample {
                title: "Working with Objects",
                code: r#"// Object Creation and Properties
let person = {
  name: 'John',
  age: 25,
  hobbies: ['reading', 'music'],
  address: {
    street: '123 Main St',
    city: 'Boston'
  }
};

// Accessing and Modifying
person.name = 'Jane';           // Dot notation
person['age'] = 26;            // Bracket notation
delete person.hobbies;         // Remove property"#,
            },
            CodeSample {
                title: "Modern Features",
                code: r#"// Spread Operator
let newFruits = [...fruits, 'pear'];
let updatedPerson = { ...person, age: 27 };

// Array Methods
let doubled = numbers.map(n => n * 2);
let evens = numbers.filter(n => n % 2 === 0);
let sum = numbers.reduce((a, b) => a + b, 0);"#,
            },
        ],
        exercises: &[
            LessonExercise {
                title: "Array Manipulation",
                prompt: "Create an array of colors and add a new color to it.",
                template: "// Create an array named 'colors' with three colors\n// Then add a new color to the end\n",
                solution: "let colors = ['red', 'blue', 'green'];\ncolors.push('yellow');",
                hint: "Use array methods like push() to add elements.",
            },
            LessonExercise {
                title: "Object Creation",
                prompt: "Create an object representing a book with title, author, and year properties.",
                template: "// Create a book object with appropriate properties\n",
                solution: "let book = {\n  title: 'JavaScript Guide',\n  author: 'John Doe',\n  year: 2023\n};",
                hint: "Use curly braces {} to create objects and define properties with key-value pairs.",
            },
        ],
    },
    Lesson {
        slug: "functions-and-scope",
        title: "Functions and Scope",
        intro: "Functions package reusable behaviour. Scope decides where a variable is visible, and closures let a function keep access to the variables it was created with.",
        samples: &[
            CodeSample {
                title: "Function Types",
                code: r#"// Function Declarations
function greet(name) {
  return "Hello, " + name + "!";
}

// Function Expression
const add = function(a, b) {
  return a + b;
};

// Arrow Function
const multiply = (a, b) => a * b;

// Default Parameters
const greetUser = (name = "Guest") => {
  return "Hello, " + name + "!";
};"#,
            },
            CodeSample {
                title: "Variable Scope",
                code: r#"// Global Scope
let globalVar = "I'm global";

function scopeExample() {
  // Function Scope
  let functionVar = "I'm function-scoped";

  if (true) {
    // Block Scope
    let blockVar = "I'm block-scoped";
    var varVariable = "I'm function-scoped (var)";
    console.log(blockVar); // Works
  }

  console.log(functionVar); // Works
  console.log(varVariable); // Works
}"#,
            },
            CodeSample {
                title: "Closures",
                code: r#"// Closures Example
function createCounter() {
  let count = 0;  // Private variable

  return {
    increment: () => {
      count++;
      return count;
    },
    getCount: () => count
  };
}

const counter = createCounter();
counter.increment(); // 1
counter.increment(); // 2"#,
            },
        ],
        exercises: &[
            LessonExercise {
                title: "Function Creation",
                prompt: "Create a function that takes two numbers and returns their sum.",
                template: "// Create a function named 'sum' that adds two numbers\n",
                solution: "function sum(a, b) {\n  return a + b;\n}",
                hint: "Use the function keyword or arrow syntax to create your function.",
            },
            LessonExercise {
                title: "Closure Practice",
                prompt: "Create a function that generates a greeting function for a specific name.",
                template: "// Create a function that returns a greeting function\n",
                solution: "function createGreeter(name) {\n  return () => {\n    return `Hello, ${name}!`;\n  };\n}",
                hint: "The inner function can still read the outer function's parameters.",
            },
        ],
    },
    Lesson {
        slug: "control-flow-and-loops",
        title: "Control Flow and Loops",
        intro: "Conditionals choose which code runs and loops repeat it. Mastering both lets a program react to data instead of running top to bottom once.",
        samples: &[
            CodeSample {
                title: "Conditional Statements",
                code: r#"// If-Else Statements
let age = 18;
if (age >= 18) {
  console.log("You can vote!");
} else {
  console.log("Too young to vote.");
}

// Switch Statement
let day = "Monday";
switch (day) {
  case "Monday":
    console.log("Start of the week");
    break;
  case "Friday":
    console.log("Weekend is near!");
    break;
  default:
    console.log("Regular day");
}"#,
            },
            CodeSample {
                title: "Loop Types",
                code: r#"// For Loop
for (let i = 0; i < 5; i++) {
  console.log(`Count: ${i}`);
}

// While Loop
let count = 0;
while (count < 3) {
  console.log(`While count: ${count}`);
  count++;
}

// For...of Loop (Arrays)
let colors = ['red', 'green', 'blue'];
for (let color of colors) {
  console.log(color);
}"#,
            },
            CodeSample {
                title: "Advanced Control Flow",
                code: r#"// Break and Continue
for (let i = 0; i < 5; i++) {
  if (i === 2) continue; // Skip 2
  if (i === 4) break;    // Stop at 4
  console.log(i);
}"#,
            },
        ],
        exercises: &[
            LessonExercise {
                title: "Conditional Logic",
                prompt: "Write a function that checks if a number is positive, negative, or zero.",
                template: "// Write your function here\nfunction checkNumber(num) {\n  // Add your code\n}",
                solution: r#"function checkNumber(num) {
  if (num > 0) {
    return "Positive";
  } else if (num < 0) {
    return "Negative";
  } else {
    return "Zero";
  }
}"#,
                hint: "Use if-else statements to check the number's value.",
            },
            LessonExercise {
                title: "Loop Practice",
                prompt: "Create a function that sums all numbers from 1 to n using a loop.",
                template: "// Write your function here\nfunction sumToN(n) {\n  // Add your code\n}",
                solution: r#"function sumToN(n) {
  let sum = 0;
  for (let i = 1; i <= n; i++) {
    sum += i;
  }
  return sum;
}"#,
                hint: "Keep a running total and add each number inside a for loop.",
            },
        ],
    },
    Lesson {
        slug: "dom-manipulation",
        title: "DOM Manipulation",
        intro: "The Document Object Model is the live tree of elements behind a web page. JavaScript can select, change, create and remove those elements and react to user events.",
        samples: &[
            CodeSample {
                title: "Selecting Elements",
                code: r#"// By ID
const element = document.getElementById('myId');

// By Class Name
const elements = document.getElementsByClassName('myClass');

// Using Query Selector
const firstMatch = document.querySelector('.myClass');
const allMatches = document.querySelectorAll('.myClass');"#,
            },
            CodeSample {
                title: "Modifying Elements",
                code: r#"// Changing Text Content
element.textContent = 'New Text';
element.innerHTML = '<span>HTML Content</span>';

// Modifying Attributes
element.setAttribute('class', 'newClass');
element.classList.add('active');
element.classList.toggle('visible');

// Changing Styles
element.style.color = 'blue';
element.style.display = 'none';"#,
            },
            CodeSample {
                title: "Event Handling",
                code: r#"element.addEventListener('click', function(event) {
  console.log('Element clicked!');
  event.preventDefault(); // Prevent default behavior
});

document.addEventListener('keydown', function(event) {
  console.log(`Key pressed: ${event.key}`);
});"#,
            },
            CodeSample {
                title: "Creating and Removing Elements",
                code: r#"const newDiv = document.createElement('div');
newDiv.textContent = 'New Element';
newDiv.classList.add('new-class');

parentElement.appendChild(newDiv);
element.remove();"#,
            },
        ],
        exercises: &[
            LessonExercise {
                title: "DOM Selection",
                prompt: "Write code to select all paragraphs with class 'highlight' and change their text color to red.",
                template: "// Select all paragraphs with class 'highlight'\n// and change their color to red\n",
                solution: r#"const highlights = document.querySelectorAll('p.highlight');
highlights.forEach(element => {
  element.style.color = 'red';
});"#,
                hint: "Use querySelectorAll and forEach to modify multiple elements.",
            },
            LessonExercise {
                title: "Event Handling",
                prompt: "Create a button click handler that toggles a 'dark-mode' class on the body element.",
                template: "// Add click event listener to button\n// that toggles 'dark-mode' class on body\n",
                solution: r#"const button = document.querySelector('#themeButton');
button.addEventListener('click', () => {
  document.body.classList.toggle('dark-mode');
});"#,
                hint: "Use addEventListener for the click event and classList.toggle for the class.",
            },
        ],
    },
    Lesson {
        slug: "async-javascript",
        title: "Asynchronous JavaScript",
        intro: "Network requests and timers finish later than the code that starts them. Callbacks, promises and async/await are three ways of saying what should happen once they do.",
        samples: &[
            CodeSample {
                title: "Callbacks",
                code: r#"function fetchData(callback) {
  setTimeout(() => {
    const data = { id: 1, name: 'John' };
    callback(data);
  }, 1000);
}

fetchData((result) => {
  console.log(result); // { id: 1, name: 'John' }
});"#,
            },
            CodeSample {
                title: "Promises",
                code: r#"function fetchUser(id) {
  return new Promise((resolve, reject) => {
    setTimeout(() => {
      resolve({ id: id, name: 'John' });
    }, 1000);
  });
}

fetchUser(1)
  .then(user => fetchPosts(user.id))
  .then(posts => console.log(posts))
  .catch(error => console.error(error));"#,
            },
            CodeSample {
                title: "Async/Await",
                code: r#"async function getUserData(id) {
  try {
    const user = await fetchUser(id);
    const posts = await fetchPosts(user.id);
    return { user, posts };
  } catch (error) {
    console.error('Error:', error);
  }
}

// Parallel Requests
const users = await Promise.all([fetchUser(1), fetchUser(2)]);"#,
            },
            CodeSample {
                title: "Fetch API",
                code: r#"async function fetchData() {
  const response = await fetch('https://api.example.com/data');
  if (!response.ok) {
    throw new Error('Network response was not ok');
  }
  return response.json();
}"#,
            },
        ],
        exercises: &[
            LessonExercise {
                title: "Promise Creation",
                prompt: "Create a promise that resolves after a specified delay with a given value.",
                template: "// Create a function that returns a promise\n// which resolves after 'delay' milliseconds\nfunction delay(ms, value) {\n  // Add your code here\n}",
                solution: r#"function delay(ms, value) {
  return new Promise(resolve => {
    setTimeout(() => {
      resolve(value);
    }, ms);
  });
}"#,
                hint: "Use the Promise constructor with setTimeout.",
            },
            LessonExercise {
                title: "Async Data Fetching",
                prompt: "Write an async function that fetches user data and their posts.",
                template: "// Create an async function that fetches\n// user data and their posts\nasync function getUserWithPosts(userId) {\n  // Add your code here\n}",
                solution: r#"async function getUserWithPosts(userId) {
  const user = await fetch(`https://api.example.com/users/${userId}`);
  const posts = await fetch(`https://api.example.com/users/${userId}/posts`);
  return {
    user: await user.json(),
    posts: await posts.json()
  };
}"#,
                hint: "Use try/catch with await for each fetch call.",
            },
        ],
    },
    Lesson {
        slug: "error-handling",
        title: "Error Handling & Debugging",
        intro: "Things go wrong at runtime: bad input, missing data, failed requests. try/catch lets a program recover, and the browser tools help find out why it failed in the first place.",
        samples: &[
            CodeSample {
                title: "Try-Catch Statements",
                code: r#"try {
  const data = JSON.parse('{"invalid": json}');
} catch (error) {
  console.error('Parsing failed:', error);
} finally {
  console.log('This runs regardless of success or failure');
}"#,
            },
            CodeSample {
                title: "Error Types",
                code: r#"try {
  null.toString();
} catch (error) {
  console.log(error instanceof TypeError); // true
}

try {
  console.log(undefinedVariable);
} catch (error) {
  console.log(error instanceof ReferenceError); // true
}"#,
            },
            CodeSample {
                title: "Custom Errors",
                code: r#"class ValidationError extends Error {
  constructor(message) {
    super(message);
    this.name = 'ValidationError';
  }
}

function validateUser(user) {
  if (!user.name) {
    throw new ValidationError('Name is required');
  }
}"#,
            },
            CodeSample {
                title: "Debugging Techniques",
                code: r#"console.warn('Warning message');
console.table([{ id: 1, name: 'John' }, { id: 2, name: 'Jane' }]);

function complexCalculation(x, y) {
  debugger; // Code execution will pause here in dev tools
  return x * y / (x - y);
}

console.time('loop');
for (let i = 0; i < 1000000; i++) {}
console.timeEnd('loop');"#,
            },
        ],
        exercises: &[
            LessonExercise {
                title: "Error Handling Implementation",
                prompt: "Create a function that safely parses JSON and handles potential errors.",
                template: "// Create a function that safely parses JSON\nfunction safeJSONParse(jsonString) {\n  // Add your code here\n}",
                solution: r#"function safeJSONParse(jsonString) {
  try {
    return { success: true, data: JSON.parse(jsonString) };
  } catch (error) {
    return { success: false, error: error.message };
  }
}"#,
                hint: "Use try-catch to handle JSON.parse errors and return an object with success status.",
            },
            LessonExercise {
                title: "Custom Error Handler",
                prompt: "Implement a function that validates an email address and throws a custom error if invalid.",
                template: "// Create an email validator with custom error\nclass EmailValidationError extends Error {\n  // Add constructor\n}\n\nfunction validateEmail(email) {\n  // Add validation logic\n}",
                solution: r#"class EmailValidationError extends Error {
  constructor(message) {
    super(message);
    this.name = 'EmailValidationError';
  }
}

function validateEmail(email) {
  if (!email) {
    throw new EmailValidationError('Email is required');
  }
  if (!/^[^\s@]+@[^\s@]+\.[^\s@]+$/.test(email)) {
    throw new EmailValidationError('Invalid email format');
  }
  return true;
}"#,
                hint: "Create a custom error class and use regex for email validation.",
            },
        ],
    },
];
