use std::sync::OnceLock;

use crate::models::{ConstraintError, Field};
use crate::models::contact::{
    CONTENT_MAX_CHARS, CONTENT_MIN_CHARS_CLIENT, NAME_MAX_CHARS, NAME_MIN_CHARS,
};

/// Returns the contact page, rendered once. The embedded script's rule
/// constants and messages are interpolated from the schema definitions in
/// `models`, so the browser-side gate mirrors the Rust rules by
/// construction.
pub fn render() -> &'static str {
    static PAGE: OnceLock<String> = OnceLock::new();
    PAGE.get_or_init(build).as_str()
}

fn build() -> String {
    let fields = Field::ALL
        .iter()
        .map(|f| format!("\"{}\"", f.as_str()))
        .collect::<Vec<_>>()
        .join(", ");

    TEMPLATE
        .replace("__FIELDS__", &fields)
        .replace("__NAME_MIN__", &NAME_MIN_CHARS.to_string())
        .replace("__NAME_MAX__", &NAME_MAX_CHARS.to_string())
        .replace("__CONTENT_MIN__", &CONTENT_MIN_CHARS_CLIENT.to_string())
        .replace("__CONTENT_MAX__", &CONTENT_MAX_CHARS.to_string())
        .replace(
            "__NAME_MIN_MSG__",
            &ConstraintError::NameTooShort.to_string(),
        )
        .replace("__NAME_MAX_MSG__", &ConstraintError::NameTooLong.to_string())
        .replace("__EMAIL_MSG__", &ConstraintError::InvalidEmail.to_string())
        .replace(
            "__CONTENT_MIN_MSG__",
            &ConstraintError::MessageTooShort.to_string(),
        )
        .replace(
            "__CONTENT_MAX_MSG__",
            &ConstraintError::MessageTooLong.to_string(),
        )
}

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="description" content="react-router-starter-template to quickly build production-ready applications.">
<title>react-router-starter-template</title>
<style>
  * { box-sizing: border-box; }
  body {
    margin: 0;
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    font-family: system-ui, sans-serif;
  }
  .brand { font-weight: 600; font-size: 3rem; margin: 4rem; }
  .layout {
    flex-grow: 1;
    display: flex;
    flex-direction: column;
    justify-content: space-evenly;
    align-items: center;
  }
  .hero { width: 75%; font-weight: 700; font-size: 2.5rem; line-height: 1.25; }
  .hero em {
    font-style: normal;
    text-decoration: underline;
    text-underline-offset: 8px;
    text-decoration-color: #6366f1;
  }
  form { width: 75%; display: flex; flex-direction: column; gap: 1.5rem; }
  label { font-weight: 500; display: block; margin-bottom: 0.5rem; }
  input, textarea {
    width: 100%;
    padding: 0.5rem 0.75rem;
    border: 1px solid #d4d4d8;
    border-radius: 0.375rem;
    font: inherit;
  }
  textarea { height: 12rem; resize: vertical; }
  button {
    align-self: flex-start;
    padding: 0.5rem 1.5rem;
    border: none;
    border-radius: 0.375rem;
    background: #18181b;
    color: #fafafa;
    font: inherit;
    cursor: pointer;
  }
  button:disabled { opacity: 0.6; cursor: default; }
  .error { color: #dc2626; font-size: 0.875rem; margin: 0.5rem 0 0; }
  .status { font-size: 0.875rem; margin: 0; }
  .status strong { display: block; }
  @media (min-width: 768px) {
    .layout { flex-direction: row; }
    .hero { width: 25%; font-size: 3.5rem; }
    form { width: 33%; }
    textarea { height: 10rem; }
  }
</style>
</head>
<body>
<span class="brand">hezino.</span>
<div class="layout">
  <div class="hero">
    Let's create a <em>production-ready application.</em>
  </div>
  <form id="contact-form" method="post" action="/" novalidate>
    <div>
      <label for="name">Name</label>
      <input type="text" id="name" name="name" placeholder="Sylvie Brown">
      <p class="error" id="name-error" hidden></p>
    </div>
    <div>
      <label for="email">Email</label>
      <input type="email" id="email" name="email" placeholder="sylvie@example.com">
      <p class="error" id="email-error" hidden></p>
    </div>
    <div>
      <label for="content">Message</label>
      <textarea id="content" name="content" placeholder="How can I help you?"></textarea>
      <p class="error" id="content-error" hidden></p>
    </div>
    <button type="submit" id="submit-button">Send</button>
    <p class="status" id="status" role="status" hidden></p>
  </form>
</div>
<script>
(function () {
  "use strict";

  var FIELDS = [__FIELDS__];

  // Counts Unicode code points, matching the server's character counting.
  function chars(value) {
    return Array.from(value).length;
  }

  function validEmail(value) {
    var parts = value.split("@");
    if (parts.length !== 2) return false;
    var local = parts[0];
    var domain = parts[1];
    if (local.length === 0 || domain.length < 3 || domain.indexOf(".") === -1) return false;
    return /^[!-~]+$/.test(value);
  }

  // First failing rule wins; returns null when the field passes.
  var rules = {
    name: function (value) {
      if (chars(value) < __NAME_MIN__) return "__NAME_MIN_MSG__";
      if (chars(value) > __NAME_MAX__) return "__NAME_MAX_MSG__";
      return null;
    },
    email: function (value) {
      if (!validEmail(value)) return "__EMAIL_MSG__";
      return null;
    },
    content: function (value) {
      if (chars(value) < __CONTENT_MIN__) return "__CONTENT_MIN_MSG__";
      if (chars(value) > __CONTENT_MAX__) return "__CONTENT_MAX_MSG__";
      return null;
    }
  };

  var form = document.getElementById("contact-form");
  var button = document.getElementById("submit-button");
  var status = document.getElementById("status");

  function showError(field, message) {
    var element = document.getElementById(field + "-error");
    if (!element) return;
    element.textContent = message;
    element.hidden = false;
  }

  function clearErrors() {
    FIELDS.forEach(function (field) {
      var element = document.getElementById(field + "-error");
      element.textContent = "";
      element.hidden = true;
    });
    status.hidden = true;
  }

  function notify(title, description) {
    status.innerHTML = "";
    var strong = document.createElement("strong");
    strong.textContent = title;
    status.appendChild(strong);
    status.appendChild(document.createTextNode(description));
    status.hidden = false;
  }

  form.addEventListener("submit", function (event) {
    event.preventDefault();
    clearErrors();

    var values = {};
    var blocked = false;
    FIELDS.forEach(function (field) {
      values[field] = document.getElementById(field).value;
      var message = rules[field](values[field]);
      if (message !== null) {
        showError(field, message);
        blocked = true;
      }
    });
    if (blocked) return;

    button.disabled = true;
    button.textContent = "Sending...";

    fetch("/", {
      method: "POST",
      headers: { "Content-Type": "application/x-www-form-urlencoded" },
      body: new URLSearchParams(values)
    })
      .then(function (response) {
        if (response.ok) {
          notify("Email has been sent", "Thank you.");
          form.reset();
          return;
        }
        return response
          .json()
          .catch(function () { return {}; })
          .then(function (payload) {
            if (payload && payload.errors) {
              Object.keys(payload.errors).forEach(function (field) {
                showError(field, payload.errors[field]);
              });
            }
            notify("Something went wrong", "Please check the form and try again.");
          });
      })
      .catch(function () {
        notify("Something went wrong", "Please try again later.");
      })
      .finally(function () {
        button.disabled = false;
        button.textContent = "Send";
      });
  });
})();
</script>
</body>
</html>
"#;
