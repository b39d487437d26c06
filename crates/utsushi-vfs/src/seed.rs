//! Built-in sample entries.
//!
//! Fixture data so a fresh engine is not empty. Not a format contract.

/// Sample `(path, content)` pairs, in insertion order.
pub const SEED_FILES: &[(&str, &str)] = &[
    (
        "/README.md",
        "# Sample Project\n\nThis project lives entirely in memory.\n\n## Usage\n\nRun `npm start` to launch the app.\n",
    ),
    (
        "/src/index.js",
        "import React from 'react';\nimport { createRoot } from 'react-dom/client';\nimport App from './components/App';\n\ncreateRoot(document.getElementById('root')).render(<App />);\n",
    ),
    (
        "/src/components/App.jsx",
        "import React from 'react';\n\nexport default function App() {\n  return <h1>Hello from the virtual file system</h1>;\n}\n",
    ),
    (
        "/package.json",
        "{\n  \"name\": \"sample-project\",\n  \"version\": \"1.0.0\",\n  \"main\": \"src/index.js\",\n  \"scripts\": {\n    \"start\": \"react-scripts start\"\n  }\n}\n",
    ),
];
